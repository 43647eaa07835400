use dioxus::prelude::*;
use vizgallery_core::{CatalogLoad, CatalogSource, Gallery, Intent};

use crate::components::{FilterBar, GalleryGrid, Lightbox};
use crate::context::{dispatch, get_config, get_initial_figure};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the gallery session, loads the catalog once, and lays out the
/// filter bar, the grid and the viewer overlay.
#[component]
pub fn App() -> Element {
    let mut gallery: Signal<Gallery> = use_signal(|| Gallery::new(get_config()));

    // Provide the session to all child components
    use_context_provider(|| gallery);

    // Load the catalog on mount. If the window closes first, the task is
    // dropped along with the scope.
    use_effect(move || {
        spawn(async move {
            let source = CatalogSource::from_manifest(get_config().manifest);
            let load = CatalogLoad::resolve(&source).await;
            gallery.write().finish_loading(load);

            if let Some(figure) = get_initial_figure() {
                match gallery.write().open_figure(&figure) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("Requested figure {} not found", figure),
                    Err(e) => tracing::error!("Failed to open {}: {}", figure, e),
                }
            }
        });
    });

    let viewer_open = gallery.read().viewer().is_open();

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "gallery-app",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |e| {
                if !viewer_open {
                    return;
                }
                if let Some(intent) = Intent::from_viewer_key(&e.key().to_string()) {
                    e.prevent_default();
                    dispatch(gallery, intent);
                }
            },

            header { class: "gallery-header",
                h1 { class: "gallery-title", "Data Visualization Gallery" }
                p { class: "gallery-subtitle",
                    "Publication-ready figures for expression, distribution and genomic analysis"
                }
            }

            FilterBar {}
            GalleryGrid {}
            Lightbox {}
        }
    }
}
