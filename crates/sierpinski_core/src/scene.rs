//! Scene composition
//!
//! The scene is three independent pieces, each built into its own [`Batch`]
//! in local coordinates and placed with its own model transform:
//!
//! 1. a large flat ground quad (static)
//! 2. the fractal pyramid (rotated about +Y)
//! 3. a sphere group: a reference sphere plus a small marker where the light
//!    sits (translated below the pyramid, then rotated with it)
//!
//! Visibility between them is left to the depth buffer.

use sierpinski_math::{mat4, Mat4, Tetrahedron, Vec3};

use crate::primitives::{Batch, Color, ColoredVertex, PrimitiveSink};
use crate::tetra::draw_tetrahedron;

/// Ground corners as listed for the original quad
///
/// Taken in this order the quad is self-intersecting, so [`ground`] emits the
/// corners in perimeter order (0, 1, 3, 2).
pub const GROUND_CORNERS: [Vec3; 4] = [
    Vec3::new(-4000.0, 0.0, 5000.0),
    Vec3::new(4000.0, 0.0, 4000.0),
    Vec3::new(-4000.0, 0.0, -4000.0),
    Vec3::new(4000.0, 0.0, -4000.0),
];

/// The ground plane as one quad facing +Y
pub fn ground(color: Color) -> Batch {
    let c = GROUND_CORNERS;
    let mut batch = Batch::with_capacity(0, 2);
    batch.quad([c[0], c[1], c[3], c[2]], Vec3::Y, color);
    batch
}

/// Edges (and optionally walls) of every leaf
pub fn pyramid(leaves: &[Tetrahedron], draw_walls: bool) -> Batch {
    let triangles = if draw_walls { leaves.len() * 4 } else { 0 };
    let mut batch = Batch::with_capacity(leaves.len() * 6, triangles);
    for leaf in leaves {
        draw_tetrahedron(&mut batch, leaf, draw_walls);
    }
    batch
}

/// Model transform of the pyramid for a rotation angle in degrees
pub fn pyramid_transform(angle: f32) -> Mat4 {
    mat4::rotation_y(angle)
}

/// Layout of the reference sphere and the light marker
#[derive(Debug, Clone, PartialEq)]
pub struct SphereGroup {
    /// Where the group sits relative to the world origin
    pub offset: Vec3,
    /// Reference sphere radius
    pub radius: f32,
    /// Segments around the vertical axis
    pub slices: u32,
    /// Segments from pole to pole
    pub stacks: u32,
    /// Color of both spheres
    pub color: Color,
    /// Light marker center, relative to the group
    pub marker_position: Vec3,
    /// Light marker radius
    pub marker_scale: f32,
}

impl Default for SphereGroup {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, -3.0, 0.0),
            radius: 1.0,
            slices: 30,
            stacks: 30,
            color: [0.0, 0.0, 1.0, 1.0],
            marker_position: Vec3::new(5.0, 5.0, 5.0),
            marker_scale: 0.1,
        }
    }
}

impl SphereGroup {
    /// Model transform: translate to `offset`, then spin with the pyramid
    pub fn transform(&self, angle: f32) -> Mat4 {
        mat4::mul(mat4::translation(self.offset), mat4::rotation_y(angle))
    }
}

/// Reference sphere and light marker, in group-local coordinates
pub fn sphere_group(group: &SphereGroup) -> Batch {
    let mut batch = Batch::new();
    draw_sphere(&mut batch, Vec3::ZERO, group.radius, group.slices, group.stacks, group.color);
    draw_sphere(
        &mut batch,
        group.marker_position,
        group.marker_scale,
        group.slices,
        group.stacks,
        group.color,
    );
    batch
}

/// Draw one sphere through a short-lived [`Quadric`]
fn draw_sphere<S: PrimitiveSink + ?Sized>(
    sink: &mut S,
    center: Vec3,
    radius: f32,
    slices: u32,
    stacks: u32,
    color: Color,
) {
    let quadric = Quadric::new(slices, stacks);
    quadric.sphere(sink, center, radius, color);
}

/// Tessellation helper for curved surfaces
///
/// Holds the sine/cosine tables for one slice/stack resolution. It is built
/// for a single draw call and dropped when that call returns.
pub struct Quadric {
    /// (sin, cos) of the azimuth for each slice boundary, `slices + 1` entries
    azimuth: Vec<(f32, f32)>,
    /// (sin, cos) of the polar angle for each stack boundary, `stacks + 1` entries
    polar: Vec<(f32, f32)>,
}

impl Quadric {
    /// Create a helper for `slices` x `stacks` (at least 3 x 2)
    pub fn new(slices: u32, stacks: u32) -> Self {
        let slices = slices.max(3);
        let stacks = stacks.max(2);

        let azimuth = (0..=slices)
            .map(|j| (std::f32::consts::TAU * j as f32 / slices as f32).sin_cos())
            .collect();
        let polar = (0..=stacks)
            .map(|i| (std::f32::consts::PI * i as f32 / stacks as f32).sin_cos())
            .collect();

        Self { azimuth, polar }
    }

    /// Segments around the vertical axis
    pub fn slices(&self) -> usize {
        self.azimuth.len() - 1
    }

    /// Segments from pole to pole
    pub fn stacks(&self) -> usize {
        self.polar.len() - 1
    }

    /// Unit-sphere direction for stack boundary `i`, slice boundary `j`
    fn direction(&self, i: usize, j: usize) -> Vec3 {
        let (sin_p, cos_p) = self.polar[i];
        let (sin_a, cos_a) = self.azimuth[j];
        Vec3::new(sin_p * cos_a, cos_p, sin_p * sin_a)
    }

    /// Number of triangles [`Quadric::sphere`] emits
    pub fn sphere_triangle_count(&self) -> usize {
        // Each pole ring loses one triangle per slice to degeneracy
        2 * self.slices() * (self.stacks() - 1)
    }

    /// Emit a sphere with smooth per-vertex normals
    pub fn sphere<S: PrimitiveSink + ?Sized>(&self, sink: &mut S, center: Vec3, radius: f32, color: Color) {
        let vertex = |n: Vec3| ColoredVertex::new(center + n * radius, n, color);
        let stacks = self.stacks();

        for i in 0..stacks {
            for j in 0..self.slices() {
                let top_left = vertex(self.direction(i, j));
                let top_right = vertex(self.direction(i, j + 1));
                let bottom_left = vertex(self.direction(i + 1, j));
                let bottom_right = vertex(self.direction(i + 1, j + 1));

                if i != 0 {
                    sink.triangle([top_left, bottom_left, top_right]);
                }
                if i != stacks - 1 {
                    sink.triangle([top_right, bottom_left, bottom_right]);
                }
            }
        }
    }
}
