//! Wayfarer Inventory - Keys, Pickups and Fences
//!
//! Passive payloads carried by world entities and the key ring the player
//! fills while exploring a level.
//!
//! # Features
//!
//! - Score coins and health pickups
//! - Typed key ids and a key ring
//! - Fences that open for a matching key and never close again
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_inventory::prelude::*;
//!
//! let mut keys = KeyRing::new();
//! keys.collect(KeyId::new(2));
//!
//! let mut fence = Fence::new(KeyId::new(2));
//! assert!(fence.try_open(&keys));
//! ```

pub mod fence;
pub mod keyring;
pub mod pickup;

pub mod prelude {
    pub use crate::fence::Fence;
    pub use crate::keyring::{KeyId, KeyRing};
    pub use crate::pickup::{Coin, HealthPickup, Key};
}

pub use prelude::*;
