//! Tag Chips Component
//!
//! Toggleable tag filters. Any number may be active at once.

use std::collections::BTreeSet;

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TagChipsProps {
    /// All tags in the catalog
    pub tags: Vec<String>,
    /// Currently active tags
    pub active: BTreeSet<String>,
    /// Called with the tag that was toggled
    pub on_toggle: EventHandler<String>,
}

#[component]
pub fn TagChips(props: TagChipsProps) -> Element {
    if props.tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div {
            class: "tag-chips",
            role: "group",
            "aria-label": "Filter by tag",
            for tag in props.tags.iter() {
                {
                    let tag_clone = tag.clone();
                    let is_active = props.active.contains(tag);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        button {
                            key: "{tag}",
                            class: if is_active { "chip active" } else { "chip" },
                            "aria-pressed": if is_active { "true" } else { "false" },
                            onclick: move |_| on_toggle.call(tag_clone.clone()),
                            "#{tag}"
                        }
                    }
                }
            }
        }
    }
}
