//! Gallery Grid Component
//!
//! Displays the filtered figures as a grid of cards.

use dioxus::prelude::*;
use vizgallery_core::{Card, Intent, IMAGE_PLACEHOLDER};

use crate::context::{dispatch, use_gallery};

/// Thumbnail grid for the current filtered sequence
///
/// The grid is rebuilt from [`vizgallery_core::GridView`] on every filter
/// change. Cards carry their position in the filtered sequence, which is
/// what activation sends to the viewer.
#[component]
pub fn GalleryGrid() -> Element {
    let gallery = use_gallery();
    let view = gallery.read().grid();

    if let Some(empty) = view.empty {
        let message = empty.message();
        return rsx! {
            div {
                class: "gallery-empty",
                role: "status",
                "{message}"
            }
        };
    }

    rsx! {
        div { class: "gallery-grid", role: "list",
            for card in view.cards {
                GalleryCard {
                    key: "{card.file}",
                    card: card.clone(),
                    on_activate: move |position| dispatch(gallery, Intent::ActivateCard(position)),
                }
            }
        }
    }
}

/// A single figure card.
///
/// Click and Enter/Space activate it. A broken image is replaced by a
/// text placeholder.
#[component]
pub fn GalleryCard(
    /// Card data from the grid projection
    card: Card,
    /// Activation handler (receives the filtered position)
    on_activate: EventHandler<usize>,
) -> Element {
    let mut image_failed = use_signal(|| false);
    let position = card.position;
    let src = card.image_src.clone();

    rsx! {
        div {
            class: "gallery-item",
            role: "button",
            tabindex: "0",
            "aria-label": "View {card.title}",
            style: "animation-delay: {card.animation_delay_ms}ms",
            onclick: move |_| on_activate.call(position),
            onkeydown: move |e| {
                if let Some(Intent::ActivateCard(p)) =
                    Intent::from_card_key(&e.key().to_string(), position)
                {
                    e.prevent_default();
                    on_activate.call(p);
                }
            },

            div { class: "gallery-item-image",
                if image_failed() {
                    div { class: "gallery-item-placeholder", "{IMAGE_PLACEHOLDER}" }
                } else {
                    img {
                        src: "{card.image_src}",
                        alt: "{card.alt}",
                        loading: "lazy",
                        onerror: move |_| {
                            tracing::warn!("Asset failed to load: {}", src);
                            image_failed.set(true);
                        },
                    }
                }
            }

            div { class: "gallery-item-info",
                h3 { class: "gallery-item-title", "{card.title}" }
                p { class: "gallery-item-category", "{card.subtitle}" }
            }
        }
    }
}
