//! Filter Bar Component
//!
//! Search box, category pills and tag chips, wired to the gallery session.

use dioxus::prelude::*;
use vizgallery_core::Intent;
use vizgallery_ui::{CategoryPills, SearchInput, TagChips};

use crate::context::{dispatch, use_gallery};

#[component]
pub fn FilterBar() -> Element {
    let gallery = use_gallery();
    let session = gallery.read();

    let categories = session.catalog().categories();
    let tags = session.catalog().tags();
    let state = session.filter_state().clone();
    let selected = session.controls().selected_category().to_string();
    let visible = session.filtered().len();
    let restricted = !state.is_unrestricted();
    drop(session);

    rsx! {
        section { class: "filter-bar",
            SearchInput {
                value: state.query.clone(),
                oninput: move |q| dispatch(gallery, Intent::SetQuery(q)),
                result_count: Some(visible),
            }

            if !categories.is_empty() {
                CategoryPills {
                    categories: categories,
                    selected: selected,
                    on_select: move |cat| dispatch(gallery, Intent::SetCategory(cat)),
                }
            }

            TagChips {
                tags: tags,
                active: state.active_tags.clone(),
                on_toggle: move |tag| dispatch(gallery, Intent::ToggleTag(tag)),
            }

            if restricted {
                button {
                    class: "clear-filters btn-secondary",
                    onclick: move |_| dispatch(gallery, Intent::ClearFilters),
                    "Clear filters"
                }
            }
        }
    }
}
