//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`WLK_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use walklock_physics::MotionConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Controller configuration
    #[serde(default)]
    pub controller: ControllerConfig,
    /// Motion integration configuration
    #[serde(default)]
    pub motion: MotionSection,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`WLK_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // WLK_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("WLK_").split("__"));

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
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Walklock - First-Person Walk Demo".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Mouse-look sensitivity in radians per pixel
    pub mouse_sensitivity: f32,
    /// Minimum interval between moved-signal emissions, in milliseconds
    pub move_interval_ms: u64,
    /// Starting planar position [x, z]
    pub start_position: [f32; 2],
    /// Starting heading in radians
    pub start_yaw: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 0.002,
            move_interval_ms: 1000,
            start_position: [0.0, 0.0],
            start_yaw: 0.0,
        }
    }
}

/// Motion integration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionSection {
    /// Horizontal velocity decay rate (per second)
    pub damping: f32,
    /// Downward acceleration (scaled units)
    pub gravity: f32,
    /// Acceleration while a movement key is held
    pub accel: f32,
    /// Vertical velocity added by a jump
    pub jump_impulse: f32,
    /// Ground plane height
    pub eye_height: f32,
}

impl Default for MotionSection {
    fn default() -> Self {
        let motion = MotionConfig::default();
        Self {
            damping: motion.damping,
            gravity: motion.gravity,
            accel: motion.accel,
            jump_impulse: motion.jump_impulse,
            eye_height: motion.eye_height,
        }
    }
}

impl MotionSection {
    /// Convert to the integrator's config type
    pub fn to_motion_config(&self) -> MotionConfig {
        MotionConfig {
            damping: self.damping,
            gravity: self.gravity,
            accel: self.accel,
            jump_impulse: self.jump_impulse,
            eye_height: self.eye_height,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.motion.damping, 10.0);
        assert_eq!(config.motion.gravity, 9.8 * 80.0);
        assert_eq!(config.motion.accel, 400.0);
        assert_eq!(config.motion.jump_impulse, 200.0);
        assert_eq!(config.motion.eye_height, 16.0);
        assert_eq!(config.controller.move_interval_ms, 1000);
    }

    #[test]
    fn test_to_motion_config_round_trip() {
        let section = MotionSection::default();
        assert_eq!(section.to_motion_config(), MotionConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("jump_impulse"));
    }
}
