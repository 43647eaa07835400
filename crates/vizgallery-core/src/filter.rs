//! Filter engine.
//!
//! A pure function from (catalog, filter state) to the visible subsequence.

use std::collections::BTreeSet;

use crate::catalog::FigureItem;

/// Category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Active filter and search criteria.
///
/// Mutated only through [`crate::controls::FilterControls`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Empty means no tag restriction; otherwise any overlap matches
    pub active_tags: BTreeSet<String>,
    /// `None` means no category restriction
    pub active_category: Option<String>,
    /// Case-insensitive substring query
    pub query: String,
}

impl FilterState {
    /// True when no criterion restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.active_tags.is_empty() && self.category().is_none() && self.needle().is_none()
    }

    /// Effective category restriction, treating `"all"` and blank as none.
    pub fn category(&self) -> Option<&str> {
        self.active_category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
    }

    /// Lowercased, trimmed query, if any.
    fn needle(&self) -> Option<String> {
        let q = self.query.trim();
        (!q.is_empty()).then(|| q.to_lowercase())
    }

    /// Whether a single item passes all three predicates.
    pub fn matches(&self, item: &FigureItem) -> bool {
        self.matches_with(item, self.needle().as_deref())
    }

    fn matches_with(&self, item: &FigureItem, needle: Option<&str>) -> bool {
        let tag_ok = self.active_tags.is_empty() || item.has_any_tag(&self.active_tags);
        let category_ok = match self.category() {
            None => true,
            Some(c) => item.category.as_deref() == Some(c),
        };
        let text_ok = match needle {
            None => true,
            Some(n) => item.search_text().contains(n),
        };
        tag_ok && category_ok && text_ok
    }
}

/// Compute the visible subsequence of `items`, preserving catalog order.
pub fn filter(items: &[FigureItem], state: &FilterState) -> Vec<FigureItem> {
    let needle = state.needle();
    items
        .iter()
        .filter(|item| state.matches_with(item, needle.as_deref()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FigureItem> {
        vec![
            FigureItem::new("boxplot.svg")
                .with_title("Box Plot")
                .with_category("distribution")
                .with_tags(["stats"]),
            FigureItem::new("umap_plot.svg")
                .with_title("UMAP Plot")
                .with_category("dimensional")
                .with_tags(["cluster"]),
            FigureItem::new("violin_plot.svg")
                .with_title("Violin Plot")
                .with_category("distribution")
                .with_tags(["stats", "density"])
                .with_description("Kernel density estimation"),
        ]
    }

    fn titles(items: &[FigureItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_empty_state_returns_everything() {
        let items = sample();
        let state = FilterState::default();
        assert!(state.is_unrestricted());
        assert_eq!(filter(&items, &state), items);
    }

    #[test]
    fn test_category_predicate() {
        let state = FilterState {
            active_category: Some("distribution".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["Box Plot", "Violin Plot"]);
    }

    #[test]
    fn test_all_category_is_unrestricted() {
        for value in ["all", "ALL", "", "  "] {
            let state = FilterState {
                active_category: Some(value.to_string()),
                ..Default::default()
            };
            assert_eq!(filter(&sample(), &state).len(), 3, "category {:?}", value);
        }
    }

    #[test]
    fn test_tags_use_or_semantics() {
        let item = FigureItem::new("x.svg").with_tags(["a", "b"]);
        let state = FilterState {
            active_tags: ["b", "c"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        assert!(state.matches(&item));

        let state = FilterState {
            active_tags: ["cluster", "density"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["UMAP Plot", "Violin Plot"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let state = FilterState {
            query: "box".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["Box Plot"]);

        let state = FilterState {
            query: "  KERNEL ".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["Violin Plot"]);
    }

    #[test]
    fn test_query_matches_category_and_tags() {
        let state = FilterState {
            query: "dimensional".to_string(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["UMAP Plot"]);

        let state = FilterState {
            query: "stats".to_string(),
            ..Default::default()
        };
        assert_eq!(filter(&sample(), &state).len(), 2);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let state = FilterState {
            active_tags: ["stats".to_string()].into_iter().collect(),
            active_category: Some("distribution".to_string()),
            query: "violin".to_string(),
        };
        assert_eq!(titles(&filter(&sample(), &state)), vec!["Violin Plot"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let state = FilterState {
            query: "heatmap".to_string(),
            ..Default::default()
        };
        assert!(filter(&sample(), &state).is_empty());
        assert!(filter(&[], &FilterState::default()).is_empty());
    }

    #[test]
    fn test_item_without_category_fails_category_predicate() {
        let items = vec![FigureItem::new("loose.svg")];
        let state = FilterState {
            active_category: Some("genomic".to_string()),
            ..Default::default()
        };
        assert!(filter(&items, &state).is_empty());
    }
}
