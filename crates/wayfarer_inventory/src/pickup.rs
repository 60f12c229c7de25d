//! Pickup payloads carried by world entities

use crate::keyring::KeyId;
use serde::{Deserialize, Serialize};

/// Adds to the player's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub score: i32,
}

impl Coin {
    pub fn new(score: i32) -> Self {
        Self { score }
    }
}

/// Restores health, only taken when the player is hurt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPickup {
    pub value: i32,
}

impl HealthPickup {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

/// Opens the fence with the same id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    pub id: KeyId,
}

impl Key {
    pub fn new(id: KeyId) -> Self {
        Self { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serde() {
        let key: Key = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(key.id, KeyId::new(3));

        let coin: Coin = serde_json::from_str(r#"{"score":5}"#).unwrap();
        assert_eq!(coin, Coin::new(5));
    }
}
