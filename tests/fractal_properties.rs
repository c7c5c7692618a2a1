//! Integration tests for pyramid generation across the workspace
//!
//! Runs the path from a typed depth through the frame update to the batch
//! that gets uploaded, without a GPU.

use sierpinski3d::config::FractalConfig;
use sierpinski3d::input::InputAction;
use sierpinski3d::prompt::DepthChoice;
use sierpinski3d::systems::SimulationSystem;
use sierpinski_core::{generate, leaf_count, pyramid, RenderState, Tetrahedron, MAX_DEPTH};

const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

fn start(line: &str) -> (SimulationSystem, RenderState) {
    let choice = DepthChoice::parse(line).unwrap();
    let sim = SimulationSystem::new(
        Tetrahedron::sierpinski_base(),
        choice.depth,
        &FractalConfig::default(),
        GREEN,
    );
    (sim, RenderState::new(choice.walls_enabled))
}

#[test]
fn test_leaf_counts_up_to_max_depth() {
    let base = Tetrahedron::sierpinski_base();
    for depth in 0..=MAX_DEPTH {
        assert_eq!(generate(base, depth, false).len(), leaf_count(depth));
    }
}

#[test]
fn test_depth_three_batch_has_walls() {
    let (mut sim, state) = start("3");
    let batch = pyramid(sim.leaves(), state.walls_enabled);
    assert_eq!(batch.line_count(), 64 * 6);
    assert_eq!(batch.triangle_count(), 64 * 4);
}

#[test]
fn test_wall_toggle_rebuilds_edges_only() {
    let (mut sim, state) = start("3");
    sim.queue(InputAction::ToggleWalls);
    let result = sim.step(state);
    assert!(result.walls_changed);

    let batch = pyramid(sim.leaves(), result.state.walls_enabled);
    assert_eq!(batch.line_count(), 64 * 6);
    assert_eq!(batch.triangle_count(), 0);
}

#[test]
fn test_deep_pyramid_stays_wireframe() {
    let (mut sim, mut state) = start("7");
    assert_eq!(sim.depth(), 6);
    for _ in 0..3 {
        sim.queue(InputAction::ToggleWalls);
        state = sim.step(state).state;
        assert!(!state.walls_enabled);
    }
    let batch = pyramid(sim.leaves(), state.walls_enabled);
    assert_eq!(batch.line_count(), 4096 * 6);
    assert_eq!(batch.triangle_count(), 0);
}

#[test]
fn test_leaves_stay_inside_base() {
    let base = Tetrahedron::sierpinski_base();
    let (min, max) = base.vertices.iter().fold(
        ([f32::MAX; 3], [f32::MIN; 3]),
        |(mut lo, mut hi), v| {
            for (i, c) in v.to_array().into_iter().enumerate() {
                lo[i] = lo[i].min(c);
                hi[i] = hi[i].max(c);
            }
            (lo, hi)
        },
    );

    for leaf in generate(base, 4, true) {
        for v in leaf.tetrahedron.vertices {
            for (i, c) in v.to_array().into_iter().enumerate() {
                assert!(c >= min[i] - 1e-5 && c <= max[i] + 1e-5);
            }
        }
    }
}

#[test]
fn test_leaf_edges_scale_with_depth() {
    let base = Tetrahedron::sierpinski_base();
    let (a, b) = base.edge(0);
    let root_len = (b - a).length();

    let leaf = generate(base, 3, false)[0].tetrahedron;
    let (a, b) = leaf.edge(0);
    assert!(((b - a).length() - root_len / 8.0).abs() < 1e-5);
}
