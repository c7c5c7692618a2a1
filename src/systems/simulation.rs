//! Frame simulation system
//!
//! Manages the per-frame state update including:
//! - Queued toggle actions -> next RenderState
//! - Rotation advance
//! - The per-depth leaf cache
//! - Fixed-interval frame pacing

use std::time::{Duration, Instant};

use sierpinski_core::{Color, FractalCache, RenderState, Tetrahedron};

use crate::config::FractalConfig;
use crate::input::InputAction;

/// Result of a simulation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// State to render this frame
    pub state: RenderState,
    /// Whether wall visibility changed, so the pyramid batch must be rebuilt
    pub walls_changed: bool,
}

/// Fold a batch of actions into the state, in arrival order
///
/// `Exit` and `ResetCamera` are handled by the event loop and leave the state
/// unchanged.
pub fn apply_actions<I>(state: RenderState, actions: I, depth: u32, override_color: Color) -> RenderState
where
    I: IntoIterator<Item = InputAction>,
{
    actions.into_iter().fold(state, |state, action| match action {
        InputAction::ToggleRotation => state.toggle_rotation(),
        InputAction::ToggleWalls => state.toggle_walls(depth),
        InputAction::LightOverride => state.set_light(override_color),
        InputAction::Exit | InputAction::ResetCamera => state,
    })
}

/// Manages the frame update
///
/// Handles:
/// - Actions queued between frames
/// - Rotation advance
/// - Leaf generation on depth change
pub struct SimulationSystem {
    depth: u32,
    rotation_speed: f32,
    override_color: Color,
    pending: Vec<InputAction>,
    cache: FractalCache,
}

impl SimulationSystem {
    /// Create a simulation rendering `root` at `depth`
    pub fn new(root: Tetrahedron, depth: u32, config: &FractalConfig, override_color: Color) -> Self {
        Self {
            depth,
            rotation_speed: config.rotation_speed,
            override_color,
            pending: Vec::new(),
            cache: FractalCache::new(root),
        }
    }

    /// Queue an action for the next frame
    pub fn queue(&mut self, action: InputAction) {
        self.pending.push(action);
    }

    /// Run one frame: drain queued actions, then advance the rotation
    pub fn step(&mut self, state: RenderState) -> SimulationResult {
        let next = apply_actions(state, self.pending.drain(..), self.depth, self.override_color);

        if next.rotation_enabled != state.rotation_enabled {
            log::info!("Rotation {}", if next.rotation_enabled { "on" } else { "off" });
        }
        if next.walls_enabled != state.walls_enabled {
            log::info!("Walls {}", if next.walls_enabled { "on" } else { "off" });
        }
        if next.light_color != state.light_color {
            log::info!("Light color set to {:?}", next.light_color);
        }

        SimulationResult {
            walls_changed: next.walls_enabled != state.walls_enabled,
            state: next.advance(self.rotation_speed),
        }
    }

    /// Leaves for the current depth
    pub fn leaves(&mut self) -> &[Tetrahedron] {
        self.cache.leaves(self.depth)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// Fixed-interval frame clock
pub struct FrameClock {
    interval: Duration,
    next_frame: Instant,
}

impl FrameClock {
    /// Create a clock whose first frame is due immediately
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: Instant::now(),
        }
    }

    /// Returns true and schedules the following frame if a frame is due at `now`
    pub fn tick(&mut self, now: Instant) -> bool {
        if now < self.next_frame {
            return false;
        }
        self.next_frame = now + self.interval;
        true
    }

    /// When the next frame is due
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }
}
