//! Grid projection.
//!
//! Turns the filtered sequence into display cards. The whole grid is rebuilt
//! on every change; at gallery scale there is nothing to gain from diffing.

use crate::catalog::{category_label, FigureItem};
use crate::config::GalleryConfig;
use crate::gallery::LoadStatus;
use crate::links;

/// Placeholder shown when an asset fails to render.
pub const IMAGE_PLACEHOLDER: &str = "Visualization Preview";

/// One card in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Position within the filtered sequence; what card activation carries
    pub position: usize,
    pub file: String,
    pub title: String,
    /// Category display name
    pub subtitle: String,
    pub image_src: String,
    pub alt: String,
    pub animation_delay_ms: u64,
}

/// What to show instead of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    Loading,
    /// Loaded fine, but there was nothing to load
    EmptyCatalog,
    NoResults,
    LoadFailed(String),
}

impl EmptyState {
    pub fn message(&self) -> String {
        match self {
            EmptyState::Loading => "Loading visualizations...".to_string(),
            EmptyState::EmptyCatalog => "This gallery has no visualizations yet.".to_string(),
            EmptyState::NoResults => "No visualizations match the current filters.".to_string(),
            EmptyState::LoadFailed(reason) => {
                format!("The gallery could not be loaded. {}", reason)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridView {
    pub cards: Vec<Card>,
    pub empty: Option<EmptyState>,
}

/// Project `items` into cards, in order.
///
/// `catalog_empty` separates "nothing loaded" from "everything filtered out".
pub fn render(
    items: &[FigureItem],
    catalog_empty: bool,
    status: &LoadStatus,
    config: &GalleryConfig,
) -> GridView {
    let cards: Vec<Card> = items
        .iter()
        .enumerate()
        .map(|(position, item)| Card {
            position,
            file: item.file.clone(),
            title: item.title.clone(),
            subtitle: category_label(item.category.as_deref()),
            image_src: links::asset_path(config, item),
            alt: item.title.clone(),
            animation_delay_ms: position as u64 * config.animation_step_ms,
        })
        .collect();

    let empty = match status {
        LoadStatus::Loading => Some(EmptyState::Loading),
        LoadStatus::Failed(reason) => Some(EmptyState::LoadFailed(reason.clone())),
        LoadStatus::Ready if catalog_empty => Some(EmptyState::EmptyCatalog),
        LoadStatus::Ready if cards.is_empty() => Some(EmptyState::NoResults),
        LoadStatus::Ready => None,
    };

    GridView { cards, empty }
}
