//! Session Configuration
//!
//! Describes one headless play session: player tuning, where progress is
//! stored, the scenes with their entities, and the scripted input to feed.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. First command line argument: `wayfarer session.toml`
//! 2. Environment variable: `WAYFARER_CONFIG=session.toml`
//! 3. Built-in demo session
//!
//! # Example Config File
//!
//! ```toml
//! tick_rate = 50.0
//!
//! [player]
//! forward_speed = 5.0
//! teleport_anchor = [0.0, 0.0, -8.0]
//!
//! [prefs]
//! path = "wayfarer_prefs.json"
//! format = "json"
//!
//! [[scenes]]
//! name = "meadow"
//! entities = [
//!     { id = 1, position = [0.0, 0.0, 2.0], kinds = [{ kind = "coin", score = 5 }] },
//! ]
//!
//! [[script]]
//! frames = 30
//! forward = -1.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wayfarer_gamestate::SaveFormat;
use wayfarer_inventory::{Coin, Fence, HealthPickup, Key, KeyId};
use wayfarer_math::Vec3;
use wayfarer_player::{ConfigError, PlayerConfig};
use wayfarer_triggers::{EntityId, EntityKind, WorldEntity};

/// Session setup errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML syntax or type error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Player section rejected
    #[error("Player config: {0}")]
    Player(#[from] ConfigError),
    /// Prefs store could not be opened
    #[error("Prefs: {0}")]
    Prefs(#[from] wayfarer_gamestate::SaveError),
    /// Session has nothing to play
    #[error("Session has no scenes")]
    NoScenes,
}

/// Where the unlock watermark lives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefsConfig {
    /// Prefs file; in-memory when unset
    pub path: Option<PathBuf>,
    /// File format
    pub format: SaveFormat,
}

/// Stand-in physics and animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Height of the floor
    pub ground_height: f32,
    /// Floor extends this far from the origin on X and Z (unbounded when unset)
    pub ground_half_extent: Option<f32>,
    /// Physics layer of the floor
    pub ground_layer: u32,
    /// Player trigger sphere radius
    pub body_radius: f32,
    /// Height of the top-down aim camera
    pub camera_height: f32,
    /// Length of the attack and ability clips
    pub attack_clip_seconds: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            ground_half_extent: None,
            ground_layer: 1,
            body_radius: 0.5,
            camera_height: 20.0,
            attack_clip_seconds: 0.6,
        }
    }
}

/// A scene and the entities it starts with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default)]
    pub entities: Vec<WorldEntity>,
}

/// Input held for a number of frames. Button presses and notifications
/// happen on the first frame only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    pub frames: u32,
    pub forward: f32,
    pub strafe: f32,
    pub jump: bool,
    pub fire: bool,
    /// Screen-space pointer (maps to world X/Z under the top-down camera)
    pub pointer: Option<[f32; 2]>,
    /// Damage dealt to the player
    pub damage: Option<i32>,
    /// Weapon hits landed
    pub weapon_hits: u32,
}

impl Default for ScriptStep {
    fn default() -> Self {
        Self {
            frames: 1,
            forward: 0.0,
            strafe: 0.0,
            jump: false,
            fire: false,
            pointer: None,
            damage: None,
            weapon_hits: 0,
        }
    }
}

/// A complete session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulation steps per second
    pub tick_rate: f32,
    pub player: PlayerConfig,
    pub prefs: PrefsConfig,
    pub world: WorldConfig,
    pub scenes: Vec<SceneConfig>,
    pub script: Vec<ScriptStep>,
    /// Config file path (if loaded from file)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    /// An empty session; sections left out of a file fall back to these
    fn default() -> Self {
        Self {
            tick_rate: 50.0,
            player: PlayerConfig::default(),
            prefs: PrefsConfig::default(),
            world: WorldConfig::default(),
            scenes: Vec::new(),
            script: Vec::new(),
            config_path: None,
        }
    }
}

impl SessionConfig {
    /// Load from the command line argument, the environment, or fall back to
    /// the demo
    pub fn load() -> Result<Self, SessionError> {
        let from_args = std::env::args().nth(1).map(PathBuf::from);
        let from_env = std::env::var("WAYFARER_CONFIG").ok().map(PathBuf::from);

        match from_args.or(from_env) {
            Some(path) => {
                let config = Self::load_from_file(&path)?;
                log::info!("Loaded session config from {}", path.display());
                Ok(config)
            }
            None => {
                log::info!("No session config given, running the demo session");
                Ok(Self::demo())
            }
        }
    }

    /// Load from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&src)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse from a TOML string
    pub fn from_toml_str(src: &str) -> Result<Self, SessionError> {
        let config: Self = toml::from_str(src)?;
        config.player.validate()?;
        if config.scenes.is_empty() {
            return Err(SessionError::NoScenes);
        }
        Ok(config)
    }

    /// Seconds per simulation step
    pub fn delta_time(&self) -> f32 {
        if self.tick_rate > 0.0 {
            1.0 / self.tick_rate
        } else {
            1.0 / 50.0
        }
    }

    /// Total scripted frames
    pub fn total_frames(&self) -> u64 {
        self.script.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        log::info!("Session Configuration:");
        log::info!("  Tick rate: {} Hz", self.tick_rate);
        log::info!("  Scenes: {}", self.scenes.len());
        log::info!("  Script: {} steps, {} frames", self.script.len(), self.total_frames());
        match &self.prefs.path {
            Some(path) => log::info!("  Prefs: {} ({:?})", path.display(), self.prefs.format),
            None => log::info!("  Prefs: in memory"),
        }
        if let Some(path) = &self.config_path {
            log::info!("  Config: {}", path.display());
        }
    }

    /// Two small levels exercising every pickup
    pub fn demo() -> Self {
        let entity = |id: u64, pos: [f32; 3], kind: EntityKind| {
            WorldEntity::new(EntityId(id))
                .with_position(Vec3::from_array(pos))
                .with_kind(kind)
        };

        let meadow = SceneConfig {
            name: "meadow".into(),
            entities: vec![
                entity(1, [0.0, 0.0, 1.0], EntityKind::Coin(Coin::new(15))),
                entity(2, [0.0, 0.0, 2.0], EntityKind::Coin(Coin::new(10))),
                entity(3, [0.0, 0.0, 3.0], EntityKind::Key(Key::new(KeyId::new(1)))),
                entity(4, [0.0, 0.0, 4.0], EntityKind::Fence(Fence::new(KeyId::new(1)))),
                entity(5, [0.0, 0.0, 5.0], EntityKind::HealthPickup(HealthPickup::new(25))),
                entity(6, [0.0, 0.0, 6.0], EntityKind::Crystal),
                entity(7, [0.0, 0.0, 8.0], EntityKind::Portal),
            ],
        };

        let ruins = SceneConfig {
            name: "ruins".into(),
            entities: vec![entity(1, [0.0, 0.0, 2.0], EntityKind::Coin(Coin::new(10)))],
        };

        let step = |frames: u32| ScriptStep { frames, ..Default::default() };

        Self {
            scenes: vec![meadow, ruins],
            script: vec![
                ScriptStep { fire: true, pointer: Some([0.0, 5.0]), ..step(10) },
                ScriptStep { damage: Some(40), ..step(1) },
                ScriptStep { forward: -1.0, pointer: Some([0.0, 20.0]), ..step(90) },
                ScriptStep { jump: true, ..step(30) },
                ScriptStep { forward: -1.0, ..step(60) },
            ],
            ..Self::default()
        }
    }
}
