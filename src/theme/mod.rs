//! Visual theme for the gallery.

mod styles;

pub use styles::GLOBAL_STYLES;
