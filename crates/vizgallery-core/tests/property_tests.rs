//! Property-based tests for filtering and viewer navigation
//!
//! Uses proptest to check the filter engine and the viewer state machine
//! over arbitrary catalogs and filter states.

use std::collections::BTreeSet;

use proptest::prelude::*;
use vizgallery_core::{filter, Catalog, FigureItem, FilterState, Viewer};

// ============================================================================
// Strategy Generators
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,8}").expect("valid regex")
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["stats", "cluster", "density", "temporal", "qc"])
        .prop_map(str::to_string)
}

fn category_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(vec!["distribution", "expression", "dimensional", "genomic"])
            .prop_map(str::to_string),
    )
}

fn item_strategy() -> impl Strategy<Value = FigureItem> {
    (
        word_strategy(),
        word_strategy(),
        category_strategy(),
        prop::collection::vec(tag_strategy(), 0..3),
        prop::option::of(word_strategy()),
    )
        .prop_map(|(file, title, category, tags, description)| FigureItem {
            file: format!("{}.svg", file),
            title,
            category,
            tags,
            description,
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(item_strategy(), 0..20).prop_map(Catalog::new)
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::collection::btree_set(tag_strategy(), 0..3),
        category_strategy(),
        prop::option::of(prop::string::string_regex("[a-zA-Z]{0,3}").expect("valid regex")),
    )
        .prop_map(|(active_tags, active_category, query)| FilterState {
            active_tags,
            active_category,
            query: query.unwrap_or_default(),
        })
}

/// True if `sub` appears in `full` in the same relative order.
fn is_subsequence(sub: &[FigureItem], full: &[FigureItem]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == s))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An unrestricted state shows the whole catalog in order
    #[test]
    fn empty_state_is_identity(catalog in catalog_strategy()) {
        let result = filter(catalog.items(), &FilterState::default());
        prop_assert_eq!(result.as_slice(), catalog.items());
    }

    /// Filtering never reorders or invents items
    #[test]
    fn result_is_ordered_subsequence(catalog in catalog_strategy(), state in state_strategy()) {
        let result = filter(catalog.items(), &state);
        prop_assert!(is_subsequence(&result, catalog.items()));
    }

    /// Same input, same output
    #[test]
    fn filter_is_idempotent(catalog in catalog_strategy(), state in state_strategy()) {
        let first = filter(catalog.items(), &state);
        let second = filter(catalog.items(), &state);
        prop_assert_eq!(first, second);
    }

    /// Every returned item satisfies the tag predicate with OR semantics
    #[test]
    fn tag_predicate_is_any_overlap(catalog in catalog_strategy(), tags in prop::collection::btree_set(tag_strategy(), 1..3)) {
        let state = FilterState { active_tags: tags.clone(), ..Default::default() };
        let result = filter(catalog.items(), &state);
        for item in catalog.items() {
            let overlaps = item.tags.iter().any(|t| tags.contains(t));
            prop_assert_eq!(result.contains(item), overlaps);
        }
    }

    /// Query matching ignores case
    #[test]
    fn query_case_insensitive(catalog in catalog_strategy(), query in "[a-zA-Z]{1,3}") {
        let lower = FilterState { query: query.to_lowercase(), ..Default::default() };
        let upper = FilterState { query: query.to_uppercase(), ..Default::default() };
        prop_assert_eq!(filter(catalog.items(), &lower), filter(catalog.items(), &upper));
    }

    /// `len` steps forward, or backward, returns to the start
    #[test]
    fn navigation_full_cycle(len in 1usize..12, start in 0usize..12, forward in any::<bool>()) {
        let start = start % len;
        let items: Vec<FigureItem> = (0..len).map(|i| FigureItem::new(format!("f{}.svg", i))).collect();
        let mut viewer = Viewer::new();
        viewer.open(items, start).unwrap();
        for _ in 0..len {
            if forward { viewer.next() } else { viewer.previous() }
            prop_assert!(viewer.current_index().unwrap() < len);
        }
        prop_assert_eq!(viewer.current_index(), Some(start));
    }

    /// Opening past the end never changes viewer state
    #[test]
    fn out_of_range_open_rejected(len in 0usize..8, extra in 0usize..8) {
        let items: Vec<FigureItem> = (0..len).map(|i| FigureItem::new(format!("f{}.svg", i))).collect();
        let mut viewer = Viewer::new();
        prop_assert!(viewer.open(items, len + extra).is_err());
        prop_assert!(!viewer.is_open());
    }
}

#[test]
fn catalog_tags_are_sorted_and_unique() {
    let catalog = Catalog::builtin();
    let tags = catalog.tags();
    let unique: BTreeSet<_> = tags.iter().cloned().collect();
    assert_eq!(tags.len(), unique.len());
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
}
