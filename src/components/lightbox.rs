//! Lightbox Component
//!
//! Full-screen viewer overlay for the current figure, with navigation,
//! copy-link, download and open-raw actions.

use std::time::Duration;

use dioxus::desktop::{window, Config, WindowBuilder};
use dioxus::prelude::*;
use vizgallery_core::{Direction, Intent};

use crate::actions;
use crate::context::{dispatch, get_config, use_gallery};

/// How long action feedback stays visible
const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// Transient feedback for the action buttons
#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Copied,
    Saved(String),
    Failed(String),
}

/// Viewer overlay
///
/// Renders nothing while the viewer is closed. Clicking the backdrop
/// dismisses it; clicks on the content do not propagate.
#[component]
pub fn Lightbox() -> Element {
    let gallery = use_gallery();
    let feedback = use_signal(|| Option::<Feedback>::None);

    let Some(slide) = gallery.read().slide() else {
        return rsx! {};
    };
    let has_siblings = slide.total > 1;
    let counter = slide.counter();

    let share_url = slide.share_url.clone();
    let copy_link = move |_| match actions::copy_to_clipboard(&share_url) {
        Ok(()) => flash(feedback, Feedback::Copied),
        Err(e) => {
            tracing::warn!("Copy link failed: {}", e);
            flash(feedback, Feedback::Failed("Copy failed, try again".to_string()));
        }
    };

    let file = gallery
        .read()
        .viewer()
        .current()
        .map(|item| item.file.clone())
        .unwrap_or_default();
    let download = move |_| {
        let file = file.clone();
        spawn(async move {
            match actions::download_asset(&get_config(), &file).await {
                Ok(path) => flash(feedback, Feedback::Saved(path.display().to_string())),
                Err(e) => {
                    tracing::warn!("Download of {} failed: {}", file, e);
                    flash(feedback, Feedback::Failed("Download failed".to_string()));
                }
            }
        });
    };

    let raw_src = slide.image_src.clone();
    let raw_title = slide.title.clone();
    let open_raw = move |_| {
        let dom = VirtualDom::new_with_props(
            RawFigure,
            RawFigureProps {
                src: raw_src.clone(),
                alt: raw_title.clone(),
            },
        );
        let cfg = Config::new()
            .with_resource_directory(get_config().asset_dir)
            .with_window(WindowBuilder::new().with_title(raw_title.clone()));
        // The window lives on in the desktop runtime; the handle is not needed.
        let _pending = window().new_window(dom, cfg);
        tracing::debug!("Opened raw figure window for {}", raw_src);
    };

    let feedback_view = match feedback() {
        Some(Feedback::Copied) => rsx! {
            p { class: "action-feedback ok", "✓ Link copied" }
        },
        Some(Feedback::Saved(path)) => rsx! {
            p { class: "action-feedback ok", "✓ Saved to {path}" }
        },
        Some(Feedback::Failed(message)) => rsx! {
            p { class: "action-feedback error", "⚠ {message}" }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            class: "lightbox active",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{slide.title}",
            onclick: move |_| dispatch(gallery, Intent::Dismiss),

            button {
                class: "lightbox-close",
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    dispatch(gallery, Intent::Dismiss);
                },
                "×"
            }

            if has_siblings {
                button {
                    class: "lightbox-nav lightbox-prev",
                    "aria-label": "Previous figure",
                    onclick: move |e| {
                        e.stop_propagation();
                        dispatch(gallery, Intent::Navigate(Direction::Previous));
                    },
                    "‹"
                }
            }

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                img {
                    class: "lightbox-image",
                    src: "{slide.image_src}",
                    alt: "{slide.alt}",
                }

                div { class: "lightbox-caption",
                    h3 { class: "lightbox-title", "{slide.title}" }
                    if let Some(description) = &slide.description {
                        p { class: "lightbox-description", "{description}" }
                    }
                    span { class: "lightbox-counter", "{counter}" }
                }

                div { class: "lightbox-actions",
                    button {
                        class: "btn-primary",
                        onclick: copy_link,
                        "Copy link"
                    }
                    button {
                        class: "btn-secondary",
                        onclick: download,
                        "Download"
                    }
                    button {
                        class: "btn-secondary",
                        title: "{slide.raw_url}",
                        onclick: open_raw,
                        "Open SVG"
                    }
                }

                {feedback_view}
            }

            if has_siblings {
                button {
                    class: "lightbox-nav lightbox-next",
                    "aria-label": "Next figure",
                    onclick: move |e| {
                        e.stop_propagation();
                        dispatch(gallery, Intent::Navigate(Direction::Next));
                    },
                    "›"
                }
            }
        }
    }
}

/// Show `value` briefly, then clear it unless something newer replaced it.
fn flash(mut feedback: Signal<Option<Feedback>>, value: Feedback) {
    feedback.set(Some(value.clone()));
    spawn(async move {
        tokio::time::sleep(FEEDBACK_DURATION).await;
        if feedback() == Some(value) {
            feedback.set(None);
        }
    });
}

/// Standalone window showing a single raw figure.
#[component]
pub fn RawFigure(src: String, alt: String) -> Element {
    rsx! {
        div {
            style: "margin: 0; display: flex; justify-content: center; align-items: center; min-height: 100vh; background: #fff;",
            img {
                src: "{src}",
                alt: "{alt}",
                style: "max-width: 100%; max-height: 100vh;",
            }
        }
    }
}
