//! Player tuning
//!
//! Loaded from TOML; every field has a default so a config file only needs
//! the values it changes.
//!
//! ```toml
//! forward_speed = 6.0
//! jump_height = 1.2
//! teleport_anchor = [0.0, 1.0, -12.0]
//! attack_lock_timeout = 1.5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML syntax or type error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Values that cannot work together
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Player character tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Horizontal speed, also the facing slerp rate
    pub forward_speed: f32,
    /// Starting and maximum health
    pub max_health: i32,
    /// Jump apex height
    pub jump_height: f32,
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Radius of the ground proximity sphere at the character's feet
    pub ground_probe_radius: f32,
    /// Physics layers counted as ground
    pub ground_layer_mask: u32,
    /// Dropping below this height kills the character
    pub fall_death_height: f32,
    /// Smoothing time of the animation blend parameter
    pub blend_damp_time: f32,
    /// Weapon hits needed before an attack becomes an ability
    pub ability_hit_threshold: u32,
    /// Score above which the level exit opens without a crystal
    pub portal_score_threshold: i32,
    /// Release a stuck attack lock after this many seconds (off when unset)
    pub attack_lock_timeout: Option<f32>,
    /// Destination of in-level portals
    pub teleport_anchor: Option<[f32; 3]>,
    /// Where the character starts
    pub spawn_position: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            forward_speed: 5.0,
            max_health: 100,
            jump_height: 1.5,
            gravity: -9.81,
            ground_probe_radius: 0.1,
            ground_layer_mask: 1,
            fall_death_height: -20.0,
            blend_damp_time: 0.1,
            ability_hit_threshold: 3,
            portal_score_threshold: 25,
            attack_lock_timeout: None,
            teleport_anchor: None,
            spawn_position: [0.0, 0.0, 0.0],
        }
    }
}

impl PlayerConfig {
    /// Parse from a TOML string
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&src)?;
        log::info!("Loaded player config from {}", path.display());
        Ok(config)
    }

    /// Reject values the controller cannot simulate
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gravity >= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity must be negative, got {}",
                self.gravity
            )));
        }
        if self.max_health <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_health must be positive, got {}",
                self.max_health
            )));
        }
        if self.jump_height < 0.0 {
            return Err(ConfigError::Invalid("jump_height must not be negative".into()));
        }
        if let Some(timeout) = self.attack_lock_timeout {
            if timeout <= 0.0 {
                return Err(ConfigError::Invalid("attack_lock_timeout must be positive".into()));
            }
        }
        Ok(())
    }

    /// Initial upward speed of a jump reaching `jump_height`
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).max(0.0).sqrt()
    }
}
