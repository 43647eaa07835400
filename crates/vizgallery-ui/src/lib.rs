//! Visualization Gallery UI Components
//!
//! Stateless Dioxus widgets for the filter bar. They render what they are
//! given and report user actions through event handlers; all filter state
//! lives in `vizgallery_core::Gallery`.

pub mod components;

pub use components::*;
