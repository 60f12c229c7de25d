//! Wayfarer Player - Character Controller
//!
//! The player state machine. Each frame it fuses input, a ground query and
//! the camera's aim ray into movement, facing and attack state; between
//! frames it resolves overlaps with world entities and incoming damage.
//!
//! # Features
//!
//! - Locomotion with a damped animation blend parameter
//! - Jump and gravity integration
//! - Attack lock released by the animation-finished acknowledgment
//! - Weapon combo: basic attack or ability
//! - Pointer-aimed facing
//! - Damage, fall death and a terminal dead state
//! - Ordered overlap resolution (coin, crystal, portal, local portal,
//!   health pickup, key, fence)
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_player::prelude::*;
//!
//! let config = PlayerConfig::load("player.toml")?;
//! let gate = ProgressionGate::new(Box::new(MemoryPrefs::new()));
//! let mut player = CharacterController::new(config, gate);
//!
//! player.tick(&FrameInput::new().with_forward(-1.0), delta_time, &physics, &camera);
//! for event in player.drain_events() {
//!     // route to animator, HUD and world
//! }
//! ```

pub mod collaborators;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod locomotion;
mod overlap;
pub mod shared;
pub mod timers;

pub mod prelude {
    pub use crate::collaborators::{AimCamera, PhysicsWorld};
    pub use crate::config::{ConfigError, PlayerConfig};
    pub use crate::controller::CharacterController;
    pub use crate::events::{AnimationCommand, AnimationTrigger, PlayerEvent, WorldCommand};
    pub use crate::input::FrameInput;
    pub use crate::locomotion::{BlendParameter, Locomotion};
    pub use crate::shared::SharedController;
    pub use crate::timers::TimerQueue;
    pub use wayfarer_gamestate::{MemoryPrefs, ProgressionGate, SceneDirector};
    pub use wayfarer_hud::HudCommand;
}

pub use prelude::*;
