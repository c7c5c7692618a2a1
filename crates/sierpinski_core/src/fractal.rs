//! Sierpinski pyramid generation
//!
//! The pyramid is built by repeated midpoint subdivision: every tetrahedron is
//! replaced by its four half-scale corner copies until the requested depth is
//! reached. Leaves come out depth-first, children in corner order, so the output
//! for depth `d + 1` is the concatenation of the depth-`d` output of each of
//! the four first-level children.

use sierpinski_math::Tetrahedron;

/// Deepest recursion level the viewer will render (4^6 = 4096 leaves)
pub const MAX_DEPTH: u32 = 6;

/// Walls can only be switched on for depths strictly below this
pub const WALL_DEPTH_LIMIT: u32 = 5;

/// A leaf tetrahedron tagged with whether its walls should be filled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leaf {
    pub tetrahedron: Tetrahedron,
    pub draw_walls: bool,
}

/// Number of leaves produced at `depth`
#[inline]
pub fn leaf_count(depth: u32) -> usize {
    4usize.pow(depth)
}

/// Lazy depth-first iterator over the leaves of a subdivision
///
/// Uses an explicit stack instead of recursion; the stack never holds more
/// than `3 * depth + 1` pending tetrahedra.
#[derive(Clone, Debug)]
pub struct Leaves {
    stack: Vec<(Tetrahedron, u32)>,
}

impl Leaves {
    /// Iterate the leaves of `root` subdivided `depth` times
    pub fn new(root: Tetrahedron, depth: u32) -> Self {
        let mut stack = Vec::with_capacity(3 * depth as usize + 1);
        stack.push((root, depth));
        Self { stack }
    }
}

impl Iterator for Leaves {
    type Item = Tetrahedron;

    fn next(&mut self) -> Option<Tetrahedron> {
        while let Some((tet, depth)) = self.stack.pop() {
            if depth == 0 {
                return Some(tet);
            }
            // Reversed so the first corner is popped first
            for child in tet.subdivide().into_iter().rev() {
                self.stack.push((child, depth - 1));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stack.iter().map(|(_, d)| leaf_count(*d)).sum();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Leaves {}

/// Generate every leaf of `root` at `depth`, each tagged with `draw_walls`
///
/// Depth 0 yields `root` itself. The caller is responsible for bounding
/// `depth` (see [`MAX_DEPTH`]); the result always holds `4^depth` leaves.
pub fn generate(root: Tetrahedron, depth: u32, draw_walls: bool) -> Vec<Leaf> {
    Leaves::new(root, depth)
        .map(|tetrahedron| Leaf { tetrahedron, draw_walls })
        .collect()
}

/// Leaf list memoised for a single depth
///
/// A request for a different depth is the only thing that triggers
/// regeneration.
pub struct FractalCache {
    root: Tetrahedron,
    depth: Option<u32>,
    leaves: Vec<Tetrahedron>,
}

impl FractalCache {
    /// Create an empty cache for `root`
    pub fn new(root: Tetrahedron) -> Self {
        Self {
            root,
            depth: None,
            leaves: Vec::new(),
        }
    }

    /// Leaves at `depth` (clamped to [`MAX_DEPTH`]), regenerating on a depth change
    pub fn leaves(&mut self, depth: u32) -> &[Tetrahedron] {
        let depth = depth.min(MAX_DEPTH);
        if self.depth != Some(depth) {
            self.leaves = Leaves::new(self.root, depth).collect();
            self.depth = Some(depth);
            log::debug!("Generated {} leaves at depth {}", self.leaves.len(), depth);
        }
        &self.leaves
    }

    /// Depth of the currently cached leaf list, if any
    pub fn cached_depth(&self) -> Option<u32> {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sierpinski_math::Vec3;

    #[test]
    fn test_leaf_count_per_depth() {
        let root = Tetrahedron::sierpinski_base();
        for depth in 0..=MAX_DEPTH {
            assert_eq!(generate(root, depth, false).len(), 4usize.pow(depth));
        }
    }

    #[test]
    fn test_depth_zero_is_identity() {
        let root = Tetrahedron::sierpinski_base();
        let leaves = generate(root, 0, true);
        assert_eq!(leaves, vec![Leaf { tetrahedron: root, draw_walls: true }]);
    }

    #[test]
    fn test_walls_flag_propagates() {
        let root = Tetrahedron::sierpinski_base();
        assert!(generate(root, 2, true).iter().all(|l| l.draw_walls));
        assert!(generate(root, 2, false).iter().all(|l| !l.draw_walls));
    }

    #[test]
    fn test_depth_one_matches_subdivide() {
        let root = Tetrahedron::sierpinski_base();
        let leaves: Vec<_> = Leaves::new(root, 1).collect();
        assert_eq!(leaves, root.subdivide().to_vec());
    }

    #[test]
    fn test_subdivision_is_compositional() {
        let root = Tetrahedron::sierpinski_base();
        for depth in 0..4 {
            let deeper: Vec<_> = Leaves::new(root, depth + 1).collect();
            let composed: Vec<_> = root
                .subdivide()
                .into_iter()
                .flat_map(|child| Leaves::new(child, depth))
                .collect();
            assert_eq!(deeper, composed, "mismatch at depth {}", depth + 1);
        }
    }

    #[test]
    fn test_first_leaf_shares_root_corner() {
        let root = Tetrahedron::sierpinski_base();
        let first = Leaves::new(root, 3).next().unwrap();
        assert_eq!(first.vertices[0], root.vertices[0]);
        // Edge 0-1 of the root is 2 long, so after 3 halvings it is 0.25
        let (a, b) = first.edge(0);
        assert!(((a - b).length() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let root = Tetrahedron::sierpinski_base();
        let mut leaves = Leaves::new(root, 3);
        assert_eq!(leaves.len(), 64);
        leaves.next();
        assert_eq!(leaves.len(), 63);
        assert_eq!(leaves.count(), 63);
    }

    #[test]
    fn test_leaves_stay_inside_root_bounds() {
        let root = Tetrahedron::sierpinski_base();
        for leaf in Leaves::new(root, 4) {
            for v in leaf.vertices {
                assert!(v.x >= -1e-6 && v.x <= 2.0 + 1e-6);
                assert!(v.y >= -1e-6 && v.y <= root.vertices[3].y + 1e-6);
            }
        }
    }

    #[test]
    fn test_cache_regenerates_only_on_depth_change() {
        let mut cache = FractalCache::new(Tetrahedron::sierpinski_base());
        assert_eq!(cache.cached_depth(), None);

        assert_eq!(cache.leaves(2).len(), 16);
        let first_ptr = cache.leaves(2).as_ptr();
        assert_eq!(cache.leaves(2).as_ptr(), first_ptr);
        assert_eq!(cache.cached_depth(), Some(2));

        assert_eq!(cache.leaves(3).len(), 64);
        assert_eq!(cache.cached_depth(), Some(3));
    }

    #[test]
    fn test_cache_clamps_depth() {
        let mut cache = FractalCache::new(Tetrahedron::new([Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]));
        assert_eq!(cache.leaves(9).len(), leaf_count(MAX_DEPTH));
        assert_eq!(cache.cached_depth(), Some(MAX_DEPTH));
    }
}
