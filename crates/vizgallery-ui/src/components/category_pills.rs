//! Category Pills Component
//!
//! Horizontal selection of category filter pills, with an "All" pill first.

use dioxus::prelude::*;
use vizgallery_core::{category_label, ALL_CATEGORIES};

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Category values present in the catalog (not display names)
    pub categories: Vec<String>,
    /// Currently selected category value, `"all"` for none
    pub selected: String,
    /// Handler called with the selected category value
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable category pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryPills {
///         categories: gallery.catalog().categories(),
///         selected: gallery.controls().selected_category().to_string(),
///         on_select: move |cat| dispatch(Intent::SetCategory(cat)),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let options = pill_options(&props.categories);

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Filter by category",
            for (value, label) in options {
                {
                    let value_clone = value.clone();
                    let is_selected = props.selected == value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{value}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value_clone.clone()),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

/// (value, label) pairs with the "all" option first
pub fn pill_options(categories: &[String]) -> Vec<(String, String)> {
    std::iter::once((ALL_CATEGORIES.to_string(), "All".to_string()))
        .chain(
            categories
                .iter()
                .map(|c| (c.clone(), category_label(Some(c)))),
        )
        .collect()
}
