//! Sierpinski pyramid viewer
//!
//! Application layer: configuration, the startup depth prompt, input mapping,
//! and the window/render/simulation systems driven by `main`.

pub mod config;
pub mod input;
pub mod prompt;
pub mod systems;
