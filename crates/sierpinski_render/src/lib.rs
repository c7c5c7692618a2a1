//! Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the Sierpinski
//! pyramid scene.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - Translating camera with a perspective projection
//! - [`pipeline::ScenePipeline`] - Lit line and triangle pipelines sharing one shader
//! - [`renderable::GpuObject`] - A core [`Batch`] uploaded with its own model transform

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

// Re-export core types for convenience
pub use sierpinski_core::{Batch, ColoredVertex, RenderState};
pub use sierpinski_math::{Mat4, Vec3};

pub use renderable::{GpuObject, to_gpu_vertices};
