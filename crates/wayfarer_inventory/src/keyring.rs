//! Key identifiers and the collected-key set

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier shared by a key and the fence it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(pub u32);

impl KeyId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

/// Keys collected during the current level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRing {
    keys: BTreeSet<KeyId>,
}

impl KeyRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key. Returns false if it was already held.
    pub fn collect(&mut self, id: KeyId) -> bool {
        let added = self.keys.insert(id);
        if added {
            log::debug!("Collected {}", id);
        }
        added
    }

    /// Is this key held
    pub fn contains(&self, id: KeyId) -> bool {
        self.keys.contains(&id)
    }

    /// Number of distinct keys held
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate held keys in id order
    pub fn iter(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.keys.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let mut ring = KeyRing::new();
        assert!(ring.collect(KeyId::new(1)));
        assert!(!ring.collect(KeyId::new(1)));
        assert!(ring.collect(KeyId::new(4)));
        assert_eq!(ring.len(), 2);
        assert!(ring.contains(KeyId::new(4)));
        assert!(!ring.contains(KeyId::new(2)));
    }

    #[test]
    fn test_iter_sorted() {
        let mut ring = KeyRing::new();
        ring.collect(KeyId::new(9));
        ring.collect(KeyId::new(3));
        let ids: Vec<_> = ring.iter().collect();
        assert_eq!(ids, vec![KeyId::new(3), KeyId::new(9)]);
    }

    #[test]
    fn test_key_id_serde_transparent() {
        let json = serde_json::to_string(&KeyId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
