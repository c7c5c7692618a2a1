//! Input handling module
//!
//! Maps toggle keys to semantic actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
