//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use serial_test::serial;
use walklock::config::AppConfig;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("WLK_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("WLK_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_carries_motion_constants() {
    std::env::remove_var("WLK_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.motion.damping, 10.0);
    assert_eq!(config.motion.gravity, 784.0);
    assert_eq!(config.motion.accel, 400.0);
    assert_eq!(config.motion.jump_impulse, 200.0);
    assert_eq!(config.motion.eye_height, 16.0);
}

#[test]
#[serial]
fn test_env_motion_override() {
    std::env::set_var("WLK_MOTION__EYE_HEIGHT", "8.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.motion.eye_height, 8.0);
    assert_eq!(config.motion.to_motion_config().eye_height, 8.0);
    std::env::remove_var("WLK_MOTION__EYE_HEIGHT");
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_defaults() {
    let config = AppConfig::load_from("does-not-exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.motion.damping, 10.0);
}
