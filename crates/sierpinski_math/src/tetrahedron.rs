//! Tetrahedron geometry
//!
//! A tetrahedron is four vertices plus two fixed index tables: the six edges
//! and the four triangular surfaces. Values are immutable; subdivision always
//! builds new vertex sets.

use crate::Vec3;

/// The 6 vertex index pairs connected by an edge
pub const EDGES: [(usize, usize); 6] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 2),
    (1, 3),
    (2, 3),
];

/// The 4 vertex index triples forming the triangular faces
pub const SURFACES: [[usize; 3]; 4] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 1, 3],
    [1, 2, 3],
];

/// Componentwise average of two points
#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}

/// A tetrahedron (3-simplex) defined by its four vertex positions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub vertices: [Vec3; 4],
}

impl Tetrahedron {
    /// Create a tetrahedron from four vertices
    #[inline]
    pub const fn new(vertices: [Vec3; 4]) -> Self {
        Self { vertices }
    }

    /// The pyramid the fractal starts from: an equilateral base on the XZ
    /// plane with edge length 2 and its apex above the base.
    pub fn sierpinski_base() -> Self {
        let sqrt3 = 3.0f32.sqrt();
        let apex_height = 26.0f32.sqrt() / 3.0;
        Self::new([
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, sqrt3),
            Vec3::new(1.0, apex_height, 2.0 / 3.0),
        ])
    }

    /// Endpoints of edge `index` (see [`EDGES`])
    #[inline]
    pub fn edge(&self, index: usize) -> (Vec3, Vec3) {
        let (a, b) = EDGES[index];
        (self.vertices[a], self.vertices[b])
    }

    /// Vertices of surface `index` (see [`SURFACES`])
    #[inline]
    pub fn surface(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = SURFACES[index];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Midpoints of all six edges, in [`EDGES`] order
    pub fn edge_midpoints(&self) -> [Vec3; 6] {
        EDGES.map(|(a, b)| midpoint(self.vertices[a], self.vertices[b]))
    }

    /// Split into the four corner tetrahedra
    ///
    /// Child `i` keeps original vertex `i` and takes the midpoints of the three
    /// edges meeting at it.
    pub fn subdivide(&self) -> [Tetrahedron; 4] {
        let v = &self.vertices;
        let [m01, m02, m03, m12, m13, m23] = self.edge_midpoints();
        [
            Tetrahedron::new([v[0], m01, m02, m03]),
            Tetrahedron::new([v[1], m01, m12, m13]),
            Tetrahedron::new([v[2], m02, m12, m23]),
            Tetrahedron::new([v[3], m03, m13, m23]),
        ]
    }
}
