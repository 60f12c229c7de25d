//! Weapon hit counter
//!
//! The weapon counts landed hits. Once enough hits have landed the next
//! strike becomes an ability and the counter starts over.

use serde::{Deserialize, Serialize};

/// Kind of strike chosen when the player attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strike {
    /// Basic attack, counter untouched
    Attack,
    /// Charged ability, counter reset
    Ability,
}

/// Weapon component owned by the character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    /// Hits landed since the last ability
    hits: u32,
    /// Hits needed before the next strike is an ability
    ability_threshold: u32,
}

impl Weapon {
    /// Create a weapon with the given ability threshold
    pub fn new(ability_threshold: u32) -> Self {
        Self {
            hits: 0,
            ability_threshold,
        }
    }

    /// Start with some hits already counted
    pub fn with_hits(mut self, hits: u32) -> Self {
        self.hits = hits;
        self
    }

    /// Hits counted so far
    pub fn hits(&self) -> u32 {
        self.hits
    }

    /// Called by the weapon when it connects with a target
    pub fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
        log::trace!("Weapon hit count: {}", self.hits);
    }

    /// Is the ability charged
    pub fn ability_ready(&self) -> bool {
        self.hits >= self.ability_threshold
    }

    /// Choose the strike for a new attack
    pub fn strike(&mut self) -> Strike {
        if self.ability_ready() {
            self.hits = 0;
            Strike::Ability
        } else {
            Strike::Attack
        }
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(3)
    }
}
