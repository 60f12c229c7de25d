//! Wayfarer Triggers - World Entities and Overlaps
//!
//! Typed world entities the player can touch, the fixed order their kinds
//! are resolved in, and a sphere trigger system that turns positions into
//! enter/exit events.
//!
//! # Features
//!
//! - `WorldEntity` carrying one or more `EntityKind`s
//! - `DISPATCH_ORDER`: the resolution order shared by every overlap
//! - Enter/exit overlap events
//! - `TriggerSystem` owning the live entities of a scene
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_triggers::prelude::*;
//!
//! let mut system = TriggerSystem::new();
//! system.spawn(WorldEntity::new(EntityId(1)).with_kind(EntityKind::Coin(Coin::new(5))));
//!
//! system.update(delta_time, PLAYER, player_position, 0.5);
//! for event in system.drain_events() {
//!     // hand enter events to the character controller
//! }
//! ```

pub mod entity;
pub mod events;
pub mod system;

pub mod prelude {
    pub use crate::entity::{EntityId, EntityKind, KindTag, WorldEntity, DISPATCH_ORDER};
    pub use crate::events::{OverlapEvent, OverlapEventType};
    pub use crate::system::TriggerSystem;
    pub use wayfarer_inventory::{Coin, Fence, HealthPickup, Key, KeyId};
}

pub use prelude::*;
