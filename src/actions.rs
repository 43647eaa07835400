//! Viewer actions that reach outside the app: clipboard and downloads.
//!
//! Failures are returned, never panicked on; the viewer reports them and
//! lets the user try again.

use std::io;
use std::path::{Path, PathBuf};

use vizgallery_core::{GalleryConfig, GalleryError, GalleryResult};

/// Put `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> GalleryResult<()> {
    // Use arboard for cross-platform clipboard access
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| GalleryError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| GalleryError::Clipboard(e.to_string()))
}

/// Directory downloads are saved into.
pub fn download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Copy a figure's asset into the user's download directory.
pub async fn download_asset(config: &GalleryConfig, file: &str) -> GalleryResult<PathBuf> {
    download_asset_to(config, file, &download_dir()).await
}

/// Copy a figure's asset into `dest_dir`, returning the written path.
pub async fn download_asset_to(
    config: &GalleryConfig,
    file: &str,
    dest_dir: &Path,
) -> GalleryResult<PathBuf> {
    let source = config.local_asset_path(file);
    let name = Path::new(file).file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file name: {}", file),
        )
    })?;
    let target = dest_dir.join(name);

    tokio::fs::create_dir_all(dest_dir).await?;
    tokio::fs::copy(&source, &target).await?;

    tracing::info!("Saved {} to {}", file, target.display());
    Ok(target)
}
