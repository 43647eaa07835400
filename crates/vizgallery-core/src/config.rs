//! Gallery configuration.
//!
//! Where assets live, how links are built, and where the catalog comes from.

use std::path::PathBuf;

/// Default relative prefix under which SVG assets are served
pub const DEFAULT_ASSET_PREFIX: &str = "svgs/";

/// Default public root used for share and raw links
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Delay step between card entrance animations
pub const DEFAULT_ANIMATION_STEP_MS: u64 = 50;

/// Runtime configuration for a gallery session.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Relative prefix prepended to every item's `file` (always ends in `/` unless empty)
    pub asset_prefix: String,
    /// Public root for derived URLs (always ends in `/`)
    pub base_url: String,
    /// External manifest; `None` uses the built-in catalog
    pub manifest: Option<PathBuf>,
    /// Local directory that contains `asset_prefix`
    pub asset_dir: PathBuf,
    /// Per-card entrance animation step
    pub animation_step_ms: u64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            manifest: None,
            asset_dir: PathBuf::from("."),
            animation_step_ms: DEFAULT_ANIMATION_STEP_MS,
        }
    }
}

impl GalleryConfig {
    /// Set the asset prefix, normalizing the trailing slash.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = normalize_dir(prefix.into(), false);
        self
    }

    /// Set the base URL, normalizing the trailing slash.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_dir(url.into(), true);
        self
    }

    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_asset_dir(mut self, dir: PathBuf) -> Self {
        self.asset_dir = dir;
        self
    }

    /// Local filesystem location of an asset file.
    pub fn local_asset_path(&self, file: &str) -> PathBuf {
        self.asset_dir.join(&self.asset_prefix).join(file)
    }
}

fn normalize_dir(mut value: String, keep_empty_as_root: bool) -> String {
    if value.is_empty() {
        if keep_empty_as_root {
            value.push('/');
        }
        return value;
    }
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.asset_prefix, "svgs/");
        assert_eq!(config.base_url, "http://localhost:8000/");
        assert!(config.manifest.is_none());
        assert_eq!(config.animation_step_ms, 50);
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let config = GalleryConfig::default()
            .with_asset_prefix("figures")
            .with_base_url("https://example.org/gallery");
        assert_eq!(config.asset_prefix, "figures/");
        assert_eq!(config.base_url, "https://example.org/gallery/");
    }

    #[test]
    fn test_empty_prefix_stays_empty() {
        let config = GalleryConfig::default().with_asset_prefix("");
        assert_eq!(config.asset_prefix, "");
    }

    #[test]
    fn test_local_asset_path() {
        let config = GalleryConfig::default().with_asset_dir(PathBuf::from("/srv/site"));
        assert_eq!(
            config.local_asset_path("boxplot.svg"),
            PathBuf::from("/srv/site/svgs/boxplot.svg")
        );
    }
}
