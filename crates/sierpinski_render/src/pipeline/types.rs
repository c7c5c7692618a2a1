//! GPU-compatible data types for the scene pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use sierpinski_math::mat4::{self, Mat4};

/// A lit, colored vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex3D {
    /// Position in object space (x, y, z)
    pub position: [f32; 3],
    /// Surface normal for lighting
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex3D {
    pub fn new(position: [f32; 3], normal: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, normal, color }
    }
}

/// Per-frame uniforms shared by every object
/// Layout: 112 bytes total (must match scene.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Projection * view (64 bytes)
    pub view_proj: Mat4,
    /// Light color (16 bytes)
    pub light_color: [f32; 4],
    /// Direction toward the light + padding (16 bytes)
    pub light_dir: [f32; 3],
    pub _padding: f32,
    /// Lighting parameters (16 bytes)
    pub ambient_strength: f32,
    pub diffuse_strength: f32,
    pub _padding2: [f32; 2],
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            view_proj: mat4::IDENTITY,
            light_color: [1.0, 1.0, 1.0, 1.0],
            light_dir: [1.0, 1.0, 1.0],
            _padding: 0.0,
            ambient_strength: 0.5,
            diffuse_strength: 0.5,
            _padding2: [0.0; 2],
        }
    }
}

/// Per-object uniforms (bind group 1)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Object-to-world transform
    pub model: Mat4,
}

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self { model: mat4::IDENTITY }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex3d_size() {
        // 3 floats position + 3 floats normal + 4 floats color = 40 bytes
        assert_eq!(size_of::<Vertex3D>(), 40);
    }

    #[test]
    fn test_scene_uniforms_size() {
        // 16 floats view_proj + 4 light_color + 3 light_dir + 1 padding
        // + 2 strengths + 2 padding = 28 floats = 112 bytes
        assert_eq!(size_of::<SceneUniforms>(), 112);
        assert_eq!(size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn test_object_uniforms_size() {
        assert_eq!(size_of::<ObjectUniforms>(), 64);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<Vertex3D>(), 4);
        assert_eq!(std::mem::align_of::<SceneUniforms>(), 4);
        assert_eq!(std::mem::align_of::<ObjectUniforms>(), 4);
    }
}
