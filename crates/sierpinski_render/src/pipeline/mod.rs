//! Rendering pipeline components
//!
//! One WGSL shader drives two pipelines: a line list for tetrahedron edges and
//! a triangle list for walls, the ground, and the spheres.

pub mod types;
pub mod scene_pipeline;

// Re-export types
pub use types::{Vertex3D, SceneUniforms, ObjectUniforms};

// Re-export pipelines
pub use scene_pipeline::{ScenePipeline, DEPTH_FORMAT};
