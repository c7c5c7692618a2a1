//! Per-frame render state
//!
//! [`RenderState`] is a small `Copy` value. Every transition returns a new
//! state; a frame takes the previous state plus its input batch and produces
//! the next one.

use crate::fractal::WALL_DEPTH_LIMIT;
use crate::primitives::Color;

/// Light color on startup
pub const WHITE_LIGHT: Color = [1.0, 1.0, 1.0, 1.0];

/// Toggles, rotation, and light color carried from frame to frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    /// Accumulated pyramid rotation about +Y, in degrees
    pub rotation: f32,
    /// Whether `rotation` advances each frame
    pub rotation_enabled: bool,
    /// Whether pyramid faces are filled
    pub walls_enabled: bool,
    /// Color of the single scene light
    pub light_color: Color,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            rotation_enabled: true,
            walls_enabled: true,
            light_color: WHITE_LIGHT,
        }
    }
}

impl RenderState {
    /// Initial state with the given wall setting
    pub fn new(walls_enabled: bool) -> Self {
        Self {
            walls_enabled,
            ..Self::default()
        }
    }

    /// Builder: set whether rotation starts enabled
    pub fn with_rotation_enabled(mut self, enabled: bool) -> Self {
        self.rotation_enabled = enabled;
        self
    }

    /// Builder: set the starting light color
    pub fn with_light_color(mut self, color: Color) -> Self {
        self.light_color = color;
        self
    }

    /// Flip rotation on/off
    pub fn toggle_rotation(self) -> Self {
        Self {
            rotation_enabled: !self.rotation_enabled,
            ..self
        }
    }

    /// Walls switch on only when currently off and `depth` is below
    /// [`WALL_DEPTH_LIMIT`]; every other press switches them off.
    pub fn toggle_walls(self, depth: u32) -> Self {
        Self {
            walls_enabled: !self.walls_enabled && depth < WALL_DEPTH_LIMIT,
            ..self
        }
    }

    /// Replace the light color
    pub fn set_light(self, color: Color) -> Self {
        Self {
            light_color: color,
            ..self
        }
    }

    /// Advance the rotation by `speed` degrees if rotation is enabled
    pub fn advance(self, speed: f32) -> Self {
        if !self.rotation_enabled {
            return self;
        }
        Self {
            rotation: self.rotation + speed,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = RenderState::default();
        assert_eq!(state.rotation, 0.0);
        assert!(state.rotation_enabled);
        assert!(state.walls_enabled);
        assert_eq!(state.light_color, WHITE_LIGHT);
    }

    #[test]
    fn test_toggle_rotation_twice_restores() {
        let state = RenderState::default();
        let toggled = state.toggle_rotation();
        assert!(!toggled.rotation_enabled);
        assert_eq!(toggled.toggle_rotation(), state);
    }

    #[test]
    fn test_toggle_walls_below_limit() {
        let off = RenderState::new(false);
        let on = off.toggle_walls(3);
        assert!(on.walls_enabled);
        assert!(!on.toggle_walls(3).walls_enabled);
        assert!(off.toggle_walls(WALL_DEPTH_LIMIT - 1).walls_enabled);
    }

    #[test]
    fn test_toggle_walls_at_or_above_limit_never_enables() {
        for depth in WALL_DEPTH_LIMIT..=6 {
            assert!(!RenderState::new(false).toggle_walls(depth).walls_enabled);
            assert!(!RenderState::new(true).toggle_walls(depth).walls_enabled);
        }
    }

    #[test]
    fn test_advance_respects_toggle() {
        let state = RenderState::default().advance(0.5).advance(0.5);
        assert_eq!(state.rotation, 1.0);

        let paused = state.toggle_rotation().advance(0.5);
        assert_eq!(paused.rotation, 1.0);
    }

    #[test]
    fn test_set_light_leaves_other_fields() {
        let green = [0.0, 1.0, 0.0, 1.0];
        let state = RenderState::default().advance(2.0).set_light(green);
        assert_eq!(state.light_color, green);
        assert_eq!(state.rotation, 2.0);
        assert!(state.walls_enabled);
    }

    #[test]
    fn test_transitions_do_not_mutate_original() {
        let state = RenderState::default();
        let _ = state.toggle_rotation().toggle_walls(1).advance(10.0);
        assert_eq!(state, RenderState::default());
    }
}
