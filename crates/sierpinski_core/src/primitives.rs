//! Drawing primitives
//!
//! Geometry code never talks to the GPU directly. It emits lines and triangles
//! into a [`PrimitiveSink`]; [`Batch`] is the sink used in practice, collecting
//! flat vertex lists that the render crate uploads as line-list and
//! triangle-list buffers.

use sierpinski_math::Vec3;

/// RGBA color
pub type Color = [f32; 4];

/// Normal given to primitives that carry no surface orientation (lines)
pub const DEFAULT_NORMAL: Vec3 = Vec3::Z;

/// A vertex with position, lighting normal, and color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColoredVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Color,
}

impl ColoredVertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3, color: Color) -> Self {
        Self { position, normal, color }
    }
}

/// Receiver for drawing primitives
pub trait PrimitiveSink {
    /// A single line segment in one flat color
    fn line(&mut self, a: Vec3, b: Vec3, color: Color);

    /// A triangle with per-vertex normals and colors
    fn triangle(&mut self, vertices: [ColoredVertex; 3]);

    /// Two triangles covering the quad `a, b, c, d` (fan from `a`)
    fn quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: Color) {
        let [a, b, c, d] = corners.map(|p| ColoredVertex::new(p, normal, color));
        self.triangle([a, b, c]);
        self.triangle([a, c, d]);
    }
}

/// Collected line and triangle vertices
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Batch {
    /// Line-list vertices, two per segment
    pub lines: Vec<ColoredVertex>,
    /// Triangle-list vertices, three per triangle
    pub triangles: Vec<ColoredVertex>,
}

impl Batch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch with room for the given number of segments and triangles
    pub fn with_capacity(line_count: usize, triangle_count: usize) -> Self {
        Self {
            lines: Vec::with_capacity(line_count * 2),
            triangles: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Number of line segments
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// True when nothing has been emitted
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.triangles.is_empty()
    }

    /// Append another batch
    pub fn extend(&mut self, other: Batch) {
        self.lines.extend(other.lines);
        self.triangles.extend(other.triangles);
    }
}

impl PrimitiveSink for Batch {
    fn line(&mut self, a: Vec3, b: Vec3, color: Color) {
        self.lines.push(ColoredVertex::new(a, DEFAULT_NORMAL, color));
        self.lines.push(ColoredVertex::new(b, DEFAULT_NORMAL, color));
    }

    fn triangle(&mut self, vertices: [ColoredVertex; 3]) {
        self.triangles.extend(vertices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_line_pushes_two_vertices() {
        let mut batch = Batch::new();
        batch.line(Vec3::ZERO, Vec3::X, RED);
        assert_eq!(batch.line_count(), 1);
        assert_eq!(batch.lines[0].position, Vec3::ZERO);
        assert_eq!(batch.lines[1].position, Vec3::X);
        assert_eq!(batch.lines[1].normal, DEFAULT_NORMAL);
        assert_eq!(batch.triangle_count(), 0);
    }

    #[test]
    fn test_quad_is_two_triangles_fanned_from_first_corner() {
        let mut batch = Batch::new();
        let corners = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 0.0, 1.0), Vec3::Z];
        batch.quad(corners, Vec3::Y, RED);

        assert_eq!(batch.triangle_count(), 2);
        let positions: Vec<Vec3> = batch.triangles.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![corners[0], corners[1], corners[2], corners[0], corners[2], corners[3]]
        );
        assert!(batch.triangles.iter().all(|v| v.normal == Vec3::Y && v.color == RED));
    }

    #[test]
    fn test_extend_merges() {
        let mut a = Batch::new();
        a.line(Vec3::ZERO, Vec3::X, RED);
        let mut b = Batch::with_capacity(1, 0);
        b.line(Vec3::ZERO, Vec3::Y, RED);
        a.extend(b);
        assert_eq!(a.line_count(), 2);
        assert!(!a.is_empty());
        assert!(Batch::new().is_empty());
    }
}
