//! Input mapping from raw events to semantic actions
//!
//! Maps keys to scene toggles like ToggleRotation, LightOverride, etc.
//! Camera keys (arrows) and the scroll wheel are NOT mapped here - they go
//! directly to CameraController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions that change the render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Close the viewer (Escape)
    Exit,
    /// Start/stop the pyramid rotation (R key)
    ToggleRotation,
    /// Show/hide pyramid walls (T key)
    ToggleWalls,
    /// Switch the light to the override color (8 key)
    LightOverride,
    /// Move the camera back to its starting offset (Home key)
    ResetCamera,
}

/// Maps raw input events to semantic actions
///
/// Arrow keys are NOT mapped here - they go directly to the
/// CameraController. This mapper handles toggle keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for toggle keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ToggleRotation),
            KeyCode::KeyT => Some(InputAction::ToggleWalls),
            KeyCode::Digit8 | KeyCode::Numpad8 => Some(InputAction::LightOverride),
            KeyCode::Home => Some(InputAction::ResetCamera),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ToggleRotation)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyT, ElementState::Pressed),
            Some(InputAction::ToggleWalls)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Digit8, ElementState::Pressed),
            Some(InputAction::LightOverride)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Home, ElementState::Pressed),
            Some(InputAction::ResetCamera)
        );
    }

    #[test]
    fn test_escape_exits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_camera_keys_not_mapped() {
        for key in [KeyCode::ArrowUp, KeyCode::ArrowDown, KeyCode::ArrowLeft, KeyCode::ArrowRight] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Released);
        assert_eq!(action, None);
    }
}
