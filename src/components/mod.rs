//! UI Components for the Visualization Gallery.

mod filter_bar;
mod gallery_grid;
mod lightbox;

pub use filter_bar::FilterBar;
pub use gallery_grid::GalleryGrid;
pub use lightbox::Lightbox;
