//! Key-locked fences

use crate::keyring::{KeyId, KeyRing};
use serde::{Deserialize, Serialize};

/// A barrier that opens once the player holds the matching key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fence {
    pub id: KeyId,
    #[serde(default)]
    pub is_open: bool,
}

impl Fence {
    /// Create a closed fence
    pub fn new(id: KeyId) -> Self {
        Self { id, is_open: false }
    }

    /// Open the fence. Returns true only on the closed-to-open transition.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        log::debug!("Fence {} opened", self.id);
        true
    }

    /// Open if `keys` holds this fence's key. Returns true if it just opened.
    pub fn try_open(&mut self, keys: &KeyRing) -> bool {
        keys.contains(self.id) && self.open()
    }
}
