//! Camera input handling
//!
//! This crate turns scroll-wheel and arrow-key input into camera translations.

mod camera_controller;

pub use camera_controller::{CameraController, CameraControl};
