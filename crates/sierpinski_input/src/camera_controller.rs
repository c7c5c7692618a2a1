//! Camera controller for scroll and arrow-key input
//!
//! Controls:
//! - Scroll up/down: move the view forward/backward along Z
//! - Up/Down arrows: shift the view along Y (Up moves the scene down)
//! - Left/Right arrows: shift the view along X (Left moves the scene right)
//!
//! Every press or wheel notch is a discrete step. Steps accumulate between
//! frames and are applied together by [`CameraController::update`].

use sierpinski_math::Vec3;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Camera controller for handling input
pub struct CameraController {
    // Translation accumulated since the last update
    pending: Vec3,

    // Configuration
    pub zoom_step: f32,
    pub pan_step: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            pending: Vec3::ZERO,
            zoom_step: 1.0,
            pan_step: 0.5,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a camera key. Releases are consumed but
    /// have no effect.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let step = match key {
            KeyCode::ArrowUp => Vec3::new(0.0, -self.pan_step, 0.0),
            KeyCode::ArrowDown => Vec3::new(0.0, self.pan_step, 0.0),
            KeyCode::ArrowLeft => Vec3::new(self.pan_step, 0.0, 0.0),
            KeyCode::ArrowRight => Vec3::new(-self.pan_step, 0.0, 0.0),
            _ => return false,
        };

        if state == ElementState::Pressed {
            self.pending += step;
        }
        true
    }

    /// Process one mouse wheel event
    ///
    /// Each event is one notch regardless of its magnitude; only the sign of
    /// the vertical component matters.
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };

        if y > 0.0 {
            self.pending.z += self.zoom_step;
        } else if y < 0.0 {
            self.pending.z -= self.zoom_step;
        }
    }

    /// Translation waiting to be applied
    pub fn pending_translation(&self) -> Vec3 {
        self.pending
    }

    /// Apply the accumulated translation to the camera
    ///
    /// Returns the camera offset after the update.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C) -> Vec3 {
        if self.pending != Vec3::ZERO {
            camera.translate(self.pending);
            self.pending = Vec3::ZERO;
        }
        camera.offset()
    }

    /// Builder: set the scroll step
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Builder: set the arrow-key step
    pub fn with_pan_step(mut self, step: f32) -> Self {
        self.pan_step = step;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    fn translate(&mut self, delta: Vec3);
    fn offset(&self) -> Vec3;
}
