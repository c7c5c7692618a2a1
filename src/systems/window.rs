//! Window management system
//!
//! Handles window creation and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::Window,
};
use sierpinski_core::RenderState;
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    shown_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            shown_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Show depth and toggle states in the title; no-op if nothing changed
    pub fn update_title(&mut self, depth: u32, state: &RenderState) {
        let title = format_title(&self.base_title, depth, state);
        if title != self.shown_title {
            self.window.set_title(&title);
            self.shown_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Window title for a depth and render state
pub fn format_title(base: &str, depth: u32, state: &RenderState) -> String {
    let on_off = |b: bool| if b { "on" } else { "off" };
    format!(
        "{} - depth {} | rotation {} [R] | walls {} [T]",
        base,
        depth,
        on_off(state.rotation_enabled),
        on_off(state.walls_enabled),
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        // Can't test the actual window without an event loop
        let title = format_title("Pyramid", 3, &RenderState::new(true));
        assert_eq!(title, "Pyramid - depth 3 | rotation on [R] | walls on [T]");
    }

    #[test]
    fn test_title_tracks_toggles() {
        let state = RenderState::new(false).toggle_rotation();
        let title = format_title("Pyramid", 6, &state);
        assert!(title.contains("rotation off"));
        assert!(title.contains("walls off"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
