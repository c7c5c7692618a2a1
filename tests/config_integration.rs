//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use sierpinski3d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("S3D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("S3D_WINDOW__TITLE");
    assert_eq!(config.window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("S3D_FRAME__INTERVAL_MS", "16");
    std::env::set_var("S3D_FRACTAL__ROTATION_SPEED", "1.5");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("S3D_FRAME__INTERVAL_MS");
    std::env::remove_var("S3D_FRACTAL__ROTATION_SPEED");
    assert_eq!(config.frame.interval_ms, 16);
    assert_eq!(config.fractal.rotation_speed, 1.5);
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("S3D_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(
        cwd.join("config/default.toml").exists(),
        "config/default.toml missing from {:?}",
        cwd
    );

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.camera.start_offset, defaults.camera.start_offset);
    assert_eq!(config.lighting.override_color, defaults.lighting.override_color);
    assert_eq!(config.scene.sphere_offset, defaults.scene.sphere_offset);
    assert_eq!(config.frame.interval_ms, defaults.frame.interval_ms);
}

#[test]
#[serial]
fn test_bad_value_is_error() {
    std::env::set_var("S3D_WINDOW__WIDTH", "wide");
    let result = AppConfig::load();
    std::env::remove_var("S3D_WINDOW__WIDTH");
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
