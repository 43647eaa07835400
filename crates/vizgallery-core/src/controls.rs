//! Filter controls.
//!
//! The only place a [`FilterState`] is mutated. Each mutator reports whether
//! anything changed so callers can skip redundant re-renders.

use crate::filter::{FilterState, ALL_CATEGORIES};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    state: FilterState,
}

impl FilterControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        let text: String = text.into();
        if self.state.query == text {
            return false;
        }
        self.state.query = text;
        true
    }

    /// Add `tag` to the active set, or remove it if already present.
    pub fn toggle_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag: String = tag.into();
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        if !self.state.active_tags.remove(tag) {
            self.state.active_tags.insert(tag.to_string());
        }
        true
    }

    /// Restrict to one category; `"all"` or blank clears the restriction.
    pub fn set_category(&mut self, category: impl Into<String>) -> bool {
        let category: String = category.into();
        let trimmed = category.trim();
        let next = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            None
        } else {
            Some(trimmed.to_string())
        };
        if self.state.active_category == next {
            return false;
        }
        self.state.active_category = next;
        true
    }

    /// Reset every criterion.
    pub fn clear(&mut self) -> bool {
        if self.state == FilterState::default() {
            return false;
        }
        self.state = FilterState::default();
        true
    }

    /// Category currently selected, `"all"` when unrestricted.
    pub fn selected_category(&self) -> &str {
        self.state.category().unwrap_or(ALL_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let controls = FilterControls::new();
        assert!(controls.state().is_unrestricted());
        assert_eq!(controls.selected_category(), "all");
    }

    #[test]
    fn test_set_query_reports_change() {
        let mut controls = FilterControls::new();
        assert!(controls.set_query("umap"));
        assert!(!controls.set_query("umap"));
        assert_eq!(controls.state().query, "umap");
    }

    #[test]
    fn test_toggle_tag_adds_and_removes() {
        let mut controls = FilterControls::new();
        assert!(controls.toggle_tag("stats"));
        assert!(controls.state().active_tags.contains("stats"));
        assert!(controls.toggle_tag("stats"));
        assert!(controls.state().active_tags.is_empty());
        assert!(!controls.toggle_tag("  "));
    }

    #[test]
    fn test_set_category_all_clears() {
        let mut controls = FilterControls::new();
        assert!(controls.set_category("distribution"));
        assert_eq!(controls.selected_category(), "distribution");
        assert!(!controls.set_category("distribution"));
        assert!(controls.set_category("all"));
        assert_eq!(controls.state().active_category, None);
        assert!(!controls.set_category("All"));
    }

    #[test]
    fn test_clear() {
        let mut controls = FilterControls::new();
        assert!(!controls.clear());
        controls.set_query("x");
        controls.toggle_tag("t");
        assert!(controls.clear());
        assert!(controls.state().is_unrestricted());
    }
}
