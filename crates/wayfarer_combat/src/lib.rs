//! Wayfarer Combat - Health, Weapon and Attack Gating
//!
//! Combat-side state owned by the player character.
//!
//! # Features
//!
//! - Integer health clamped to `[0, max]` with display fraction
//! - Weapon hit counter deciding between a basic attack and an ability
//! - Attack gate: the single writer of the "can act" lock
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_combat::prelude::*;
//!
//! let mut health = Health::new(100);
//! let outcome = health.apply_damage(30);
//! assert!(!outcome.depleted);
//!
//! let mut weapon = Weapon::new(3);
//! weapon.record_hit();
//! assert_eq!(weapon.strike(), Strike::Attack);
//! ```

pub mod action;
pub mod health;
pub mod weapon;

pub mod prelude {
    pub use crate::action::{ActionState, AttackGate};
    pub use crate::health::{DamageOutcome, Health};
    pub use crate::weapon::{Strike, Weapon};
}

pub use prelude::*;
