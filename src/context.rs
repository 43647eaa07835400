//! Gallery context provider.
//!
//! Provides the single [`Gallery`] session to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let gallery = use_gallery();
//! dispatch(gallery, Intent::ToggleTag("stats".into()));
//! ```

use dioxus::prelude::*;
use vizgallery_core::{Gallery, GalleryConfig, Intent};

/// Get the configuration the app was started with.
pub fn get_config() -> GalleryConfig {
    crate::get_config()
}

/// Get the figure requested on the command line, if any.
pub fn get_initial_figure() -> Option<String> {
    crate::get_initial_figure()
}

/// Hook to access the gallery session from context.
pub fn use_gallery() -> Signal<Gallery> {
    use_context::<Signal<Gallery>>()
}

/// Apply an intent to the session.
///
/// Errors here are caller bugs (a stale card position); they are logged and
/// never surface to the page.
pub fn dispatch(mut gallery: Signal<Gallery>, intent: Intent) {
    if let Err(e) = gallery.write().dispatch(intent) {
        tracing::error!("Intent rejected: {}", e);
    }
}
