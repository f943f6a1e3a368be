//! Browser front end
//!
//! Turns `GameEvent`s into DOM updates. The view never owns game data; the
//! only thing it keeps per planet is the `data-size` tag clicks report back.

pub mod dom;

pub use dom::{DomView, size_from_click};
