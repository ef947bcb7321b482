//! Form rendering module
//!
//! - `field_renderer`: boxed inputs, textareas and the yes/no selector

mod field_renderer;

pub use field_renderer::{draw_field, draw_selector};
