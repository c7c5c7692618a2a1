//! Primitive emission for a single leaf tetrahedron

use sierpinski_math::{Tetrahedron, EDGES, SURFACES};

use crate::primitives::{Color, ColoredVertex, PrimitiveSink};

/// Flat color of every tetrahedron edge
pub const EDGE_COLOR: Color = [0.2, 0.2, 0.2, 1.0];

/// Wall colors, indexed by a vertex's position within its surface triple
///
/// The color depends on where the vertex appears in the face enumeration, not
/// on which of the four tetrahedron vertices it is, so a shared corner can be
/// colored differently on each face it belongs to.
pub const WALL_PALETTE: [Color; 3] = [
    [0.0, 0.0, 1.0, 1.0], // dark blue
    [0.0, 0.5, 1.0, 1.0], // medium blue
    [0.0, 1.0, 1.0, 1.0], // cyan
];

/// Emit the 6 edges of `tet`, plus its 4 faces when `draw_walls` is set
pub fn draw_tetrahedron<S: PrimitiveSink + ?Sized>(sink: &mut S, tet: &Tetrahedron, draw_walls: bool) {
    for (a, b) in EDGES {
        sink.line(tet.vertices[a], tet.vertices[b], EDGE_COLOR);
    }

    if !draw_walls {
        return;
    }

    for surface in SURFACES {
        let [a, b, c] = surface.map(|i| tet.vertices[i]);
        let normal = (b - a).cross(c - a).normalized();
        sink.triangle([
            ColoredVertex::new(a, normal, WALL_PALETTE[0]),
            ColoredVertex::new(b, normal, WALL_PALETTE[1]),
            ColoredVertex::new(c, normal, WALL_PALETTE[2]),
        ]);
    }
}
