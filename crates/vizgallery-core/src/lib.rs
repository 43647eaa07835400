//! Visualization Gallery Core Library
//!
//! Catalog, filtering and lightbox logic for a static gallery of SVG figures.
//!
//! ## Overview
//!
//! Nothing in this crate knows about a UI framework. The presentation layer
//! builds a [`Gallery`] once at startup, feeds it [`Intent`]s, and reads back
//! a [`GridView`] and an optional [`Slide`] to draw.
//!
//! ## Quick Start
//!
//! ```
//! use vizgallery_core::{Catalog, Gallery, GalleryConfig, Intent};
//!
//! let mut gallery = Gallery::with_catalog(GalleryConfig::default(), Catalog::builtin());
//!
//! gallery.dispatch(Intent::SetCategory("distribution".into())).unwrap();
//! assert_eq!(gallery.grid().cards.len(), 2);
//!
//! gallery.dispatch(Intent::ActivateCard(0)).unwrap();
//! assert_eq!(gallery.slide().unwrap().title, "Box Plot");
//! ```

mod builtin;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod grid;
pub mod links;
pub mod manifest;
pub mod viewer;

// Re-exports
pub use catalog::{category_label, title_from_file, Catalog, CatalogLoad, CatalogSource, FigureItem};
pub use config::GalleryConfig;
pub use controls::FilterControls;
pub use error::{GalleryError, GalleryResult};
pub use filter::{filter, FilterState, ALL_CATEGORIES};
pub use gallery::{Gallery, Intent, LoadStatus};
pub use grid::{Card, EmptyState, GridView, IMAGE_PLACEHOLDER};
pub use manifest::ParsedManifest;
pub use viewer::{Direction, Slide, Viewer, ViewerState};
