//! Lightbox viewer.
//!
//! Shows one figure of the filtered sequence at a time.
//!
//! ```text
//!            open(items, i)
//!   Closed ─────────────────▶ Open(i)
//!     ▲                        │  next / previous
//!     │ close / dismiss /      ▼
//!     └──── cancel ─────── Open(j)
//! ```
//!
//! The viewer keeps its own copy of the sequence it was opened on, so its
//! index always refers to that sequence even if the grid moves on.

use crate::catalog::FigureItem;
use crate::config::GalleryConfig;
use crate::error::{GalleryError, GalleryResult};
use crate::links;

/// Navigation direction inside the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Viewer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerState {
    #[default]
    Closed,
    Open(usize),
}

/// Everything the overlay needs to draw the current figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub image_src: String,
    pub alt: String,
    pub title: String,
    pub description: Option<String>,
    pub share_url: String,
    pub raw_url: String,
    /// Zero-based position in the filtered sequence
    pub position: usize,
    pub total: usize,
}

impl Slide {
    /// "3 / 10"
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position + 1, self.total)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    items: Vec<FigureItem>,
    state: ViewerState,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open(i) => Some(i),
            ViewerState::Closed => None,
        }
    }

    pub fn current(&self) -> Option<&FigureItem> {
        self.current_index().and_then(|i| self.items.get(i))
    }

    /// Show `items[index]`.
    ///
    /// `index` must be a position in the filtered sequence the caller is
    /// displaying. An out-of-range index is a caller bug: it is reported as
    /// [`GalleryError::Index`] and the viewer is left untouched.
    pub fn open(&mut self, items: Vec<FigureItem>, index: usize) -> GalleryResult<&FigureItem> {
        if index >= items.len() {
            tracing::error!(index, len = items.len(), "Viewer opened out of range");
            return Err(GalleryError::Index {
                index,
                len: items.len(),
            });
        }
        tracing::debug!(index, file = %items[index].file, "Viewer open");
        self.items = items;
        self.state = ViewerState::Open(index);
        Ok(&self.items[index])
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn previous(&mut self) {
        self.navigate(Direction::Previous);
    }

    /// Step with wraparound. No-op when closed or with fewer than two items.
    pub fn navigate(&mut self, direction: Direction) {
        let ViewerState::Open(current) = self.state else {
            return;
        };
        let len = self.items.len();
        if len <= 1 {
            return;
        }
        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        };
        self.state = ViewerState::Open(next);
    }

    /// Return to `Closed`. Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("Viewer closed");
        }
        self.state = ViewerState::Closed;
        self.items.clear();
    }

    /// Presentation data for the current figure, if open.
    pub fn slide(&self, config: &GalleryConfig) -> Option<Slide> {
        let position = self.current_index()?;
        let item = self.items.get(position)?;
        Some(Slide {
            image_src: links::asset_path(config, item),
            alt: item.title.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            share_url: links::share_url(config, item),
            raw_url: links::raw_url(config, item),
            position,
            total: self.items.len(),
        })
    }
}
