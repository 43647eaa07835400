//! Reusable filter bar widgets.

mod category_pills;
mod search_input;
mod tag_chips;

pub use category_pills::*;
pub use search_input::*;
pub use tag_chips::*;
