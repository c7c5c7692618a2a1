//! 3D Mathematics Library
//!
//! Vector, matrix, and tetrahedron types used by the Sierpinski pyramid viewer.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Mat4`] - 4x4 column-major matrix for homogeneous transforms
//! - [`Tetrahedron`] - Four vertices with the fixed edge and surface tables

mod vec3;
pub mod mat4;
pub mod tetrahedron;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use tetrahedron::{Tetrahedron, EDGES, SURFACES, midpoint};
