#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use vizgallery_core::GalleryConfig;

/// Global gallery configuration, set from command line
static GALLERY_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Figure to open on startup (file name or share URL)
static INITIAL_FIGURE: OnceLock<String> = OnceLock::new();

/// Get the gallery configuration (set from command line or default)
pub fn get_config() -> GalleryConfig {
    GALLERY_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the figure requested with --open, if any
pub fn get_initial_figure() -> Option<String> {
    INITIAL_FIGURE.get().cloned()
}

/// Visualization Gallery - browse a set of SVG figures
#[derive(Parser, Debug)]
#[command(name = "vizgallery-desktop")]
#[command(about = "Visualization Gallery - filter, search and view SVG figures")]
struct Args {
    /// JSON manifest describing the figures (default: built-in set)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory containing the asset prefix folder
    #[arg(short, long, default_value = ".")]
    asset_dir: PathBuf,

    /// Relative folder holding the SVG files
    #[arg(long, default_value = vizgallery_core::config::DEFAULT_ASSET_PREFIX)]
    asset_prefix: String,

    /// Public root used for share and raw links
    #[arg(long, default_value = vizgallery_core::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Open the viewer on this figure (file name or share URL)
    #[arg(short, long)]
    open: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up logging based on verbosity level; RUST_LOG takes precedence
fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let config = GalleryConfig::default()
        .with_manifest(args.manifest)
        .with_asset_dir(args.asset_dir)
        .with_asset_prefix(args.asset_prefix)
        .with_base_url(args.base_url);

    tracing::info!(
        "Starting gallery (manifest: {:?}, assets: {:?})",
        config.manifest,
        config.local_asset_path("")
    );

    let resource_dir = config.asset_dir.clone();
    let _ = GALLERY_CONFIG.set(config);
    if let Some(figure) = args.open {
        let _ = INITIAL_FIGURE.set(figure);
    }

    // Configure desktop window; relative image sources resolve under asset_dir
    let window = Config::new()
        .with_resource_directory(resource_dir)
        .with_window(
            WindowBuilder::new()
                .with_title("Visualization Gallery")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
