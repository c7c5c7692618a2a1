//! Core types for the Sierpinski pyramid viewer
//!
//! Everything in this crate is pure: geometry is generated into plain vertex
//! batches through the [`PrimitiveSink`] trait, so it can be tested without a
//! graphics context.
//!
//! - [`fractal`] - Recursive midpoint subdivision and the per-depth leaf cache
//! - [`primitives`] - Colored vertices, line/triangle batches, and the sink trait
//! - [`tetra`] - Emits edges and walls for one leaf tetrahedron
//! - [`scene`] - Ground quad, pyramid batch, and the sphere group
//! - [`state`] - Immutable per-frame render state

pub mod fractal;
pub mod primitives;
pub mod tetra;
pub mod scene;
pub mod state;

pub use fractal::{generate, leaf_count, FractalCache, Leaf, Leaves, MAX_DEPTH, WALL_DEPTH_LIMIT};
pub use primitives::{Batch, Color, ColoredVertex, PrimitiveSink};
pub use tetra::{draw_tetrahedron, EDGE_COLOR, WALL_PALETTE};
pub use scene::{ground, pyramid, pyramid_transform, sphere_group, Quadric, SphereGroup, GROUND_CORNERS};
pub use state::{RenderState, WHITE_LIGHT};

// Re-export math types for convenience
pub use sierpinski_math::{Vec3, Tetrahedron};
