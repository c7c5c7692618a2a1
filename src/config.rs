//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml` (version controlled)
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`S3D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Serialized, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use sierpinski_core::SphereGroup;
use sierpinski_math::Vec3;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Fractal animation configuration
    #[serde(default)]
    pub fractal: FractalConfig,
    /// Lighting configuration
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Scene layout configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Frame pacing configuration
    #[serde(default)]
    pub frame: FrameConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Built-in defaults
    /// 2. `config/default.toml`
    /// 3. `config/user.toml`
    /// 4. Environment variables (`S3D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // S3D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("S3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sierpinski Pyramid".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Initial view translation [x, y, z]
    pub start_offset: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Distance moved per scroll notch
    pub zoom_step: f32,
    /// Distance moved per arrow key press
    pub pan_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_offset: [0.0, -0.5, -5.0],
            fov: 70.0,
            near: 0.1,
            far: 50.0,
            zoom_step: 1.0,
            pan_step: 0.5,
        }
    }
}

/// Fractal animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractalConfig {
    /// Degrees added to the rotation each frame while rotating
    pub rotation_speed: f32,
    /// Whether rotation starts enabled
    pub rotation_enabled: bool,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 0.5,
            rotation_enabled: true,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Starting light color [r, g, b, a]
    pub light_color: [f32; 4],
    /// Light color set by the override key [r, g, b, a]
    pub override_color: [f32; 4],
    /// Direction toward the light [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            light_color: [1.0, 1.0, 1.0, 1.0],
            override_color: [0.0, 1.0, 0.0, 1.0],
            light_dir: [1.0, 1.0, 1.0],
            ambient_strength: 0.6,
            diffuse_strength: 0.6,
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Scene layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Ground color [r, g, b, a]
    pub ground_color: [f32; 4],
    /// Color of the reference sphere and light marker [r, g, b, a]
    pub sphere_color: [f32; 4],
    /// Reference sphere radius
    pub sphere_radius: f32,
    /// Sphere segments around the vertical axis
    pub sphere_slices: u32,
    /// Sphere segments from pole to pole
    pub sphere_stacks: u32,
    /// Sphere group position [x, y, z]
    pub sphere_offset: [f32; 3],
    /// Light marker position within the sphere group [x, y, z]
    pub light_marker_position: [f32; 3],
    /// Light marker radius
    pub light_marker_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ground_color: [0.0, 0.0, 1.0, 1.0],
            sphere_color: [0.0, 0.0, 1.0, 1.0],
            sphere_radius: 1.0,
            sphere_slices: 30,
            sphere_stacks: 30,
            sphere_offset: [0.0, -3.0, 0.0],
            light_marker_position: [5.0, 5.0, 5.0],
            light_marker_scale: 0.1,
        }
    }
}

impl SceneConfig {
    /// Convert to the core sphere group layout
    pub fn to_sphere_group(&self) -> SphereGroup {
        SphereGroup {
            offset: Vec3::from_array(self.sphere_offset),
            radius: self.sphere_radius,
            slices: self.sphere_slices,
            stacks: self.sphere_stacks,
            color: self.sphere_color,
            marker_position: Vec3::from_array(self.light_marker_position),
            marker_scale: self.light_marker_scale,
        }
    }
}

/// Frame pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Time between frames in milliseconds
    pub interval_ms: u64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { interval_ms: 20 }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
