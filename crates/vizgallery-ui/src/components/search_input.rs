//! Search Input Component
//!
//! Free-text query box for the gallery.

use dioxus::prelude::*;

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current query
    pub value: String,
    /// Handler called on every edit
    pub oninput: EventHandler<String>,
    #[props(default = "Search visualizations...".to_string())]
    pub placeholder: String,
    /// Number of visible results, shown next to the box
    #[props(default)]
    pub result_count: Option<usize>,
}

/// Search box with a clear button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SearchInput {
///         value: gallery.filter_state().query.clone(),
///         oninput: move |q| dispatch(Intent::SetQuery(q)),
///         result_count: Some(gallery.filtered().len()),
///     }
/// }
/// ```
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let has_value = !props.value.is_empty();
    let count_label = props.result_count.map(result_label);

    rsx! {
        div { class: "search-field",
            input {
                id: "gallery-search",
                class: "search-input",
                r#type: "search",
                "aria-label": "Search visualizations",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if has_value {
                button {
                    class: "search-clear",
                    "aria-label": "Clear search",
                    onclick: move |_| props.oninput.call(String::new()),
                    "×"
                }
            }
            if let Some(label) = count_label {
                span { class: "search-count", "{label}" }
            }
        }
    }
}

/// "1 figure" / "4 figures"
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 figure".to_string()
    } else {
        format!("{} figures", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_label_pluralizes() {
        assert_eq!(result_label(0), "0 figures");
        assert_eq!(result_label(1), "1 figure");
        assert_eq!(result_label(7), "7 figures");
    }
}
