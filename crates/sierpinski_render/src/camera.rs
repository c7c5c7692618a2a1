//! Scene camera
//!
//! The camera never rotates. Its view transform is a single translation that
//! starts at a fixed offset and accumulates every scroll/arrow step, which is
//! equivalent to stacking the individual translations since they commute.

use sierpinski_input::CameraControl;
use sierpinski_math::{mat4, Mat4, Vec3};

/// Translating camera with a perspective projection
pub struct Camera {
    /// Current view translation
    pub offset: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,

    start_offset: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -0.5, -5.0))
    }
}

impl Camera {
    /// Create a camera whose view starts translated by `start_offset`
    pub fn new(start_offset: Vec3) -> Self {
        Self {
            offset: start_offset,
            fov: 70.0,
            near: 0.1,
            far: 50.0,
            start_offset,
        }
    }

    /// Builder: set the projection parameters
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Self {
        self.fov = fov;
        self.near = near;
        self.far = far;
        self
    }

    /// Return to the starting offset
    pub fn reset(&mut self) {
        self.offset = self.start_offset;
    }

    /// World-to-view transform
    pub fn view_matrix(&self) -> Mat4 {
        mat4::translation(self.offset)
    }

    /// Projection for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov, aspect, self.near, self.far)
    }

    /// Projection * view
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}

impl CameraControl for Camera {
    fn translate(&mut self, delta: Vec3) {
        self.offset += delta;
    }

    fn offset(&self) -> Vec3 {
        self.offset
    }
}
