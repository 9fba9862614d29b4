//! Layout resolver for widget geometry
//!
//! Turns the raw `x`, `y`, `width` and `height` strings of a view script into
//! absolute pixel rectangles. Sizes may be absolute or relative to the screen
//! (`full`, `full-N`); positions may be absolute, screen-relative (`right`,
//! `center`, `bottom`) or relative to an element declared earlier
//! (`left#name`, `right#name`).

pub mod config;
pub mod element;
pub mod error;
pub mod registry;
pub mod session;
pub mod types;

pub use config::{DuplicatePolicy, LayoutConfig};
pub use element::{Element, Placement};
pub use error::{Field, LayoutError};
pub use registry::Registry;
pub use session::LayoutSession;
pub use types::{Bounds, ScreenExtent};
