//! Typed world entities

use serde::{Deserialize, Serialize};
use std::fmt;
use wayfarer_inventory::{Coin, Fence, HealthPickup, Key};
use wayfarer_math::Vec3;

/// Engine-side entity handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// A behaviour attached to a world entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    /// Score pickup
    Coin(Coin),
    /// Progression key for the level exit
    Crystal,
    /// Level exit
    Portal,
    /// In-level teleporter to the anchor point
    LocalPortal,
    /// Health restore
    HealthPickup(HealthPickup),
    /// Fence key
    Key(Key),
    /// Key-locked barrier
    Fence(Fence),
}

impl EntityKind {
    /// Discriminant used for ordering
    pub fn tag(&self) -> KindTag {
        match self {
            EntityKind::Coin(_) => KindTag::Coin,
            EntityKind::Crystal => KindTag::Crystal,
            EntityKind::Portal => KindTag::Portal,
            EntityKind::LocalPortal => KindTag::LocalPortal,
            EntityKind::HealthPickup(_) => KindTag::HealthPickup,
            EntityKind::Key(_) => KindTag::Key,
            EntityKind::Fence(_) => KindTag::Fence,
        }
    }
}

/// Kind discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Coin,
    Crystal,
    Portal,
    LocalPortal,
    HealthPickup,
    Key,
    Fence,
}

/// Order in which an entity's kinds are resolved on overlap.
///
/// Every kind present is resolved; one kind never hides another.
pub const DISPATCH_ORDER: [KindTag; 7] = [
    KindTag::Coin,
    KindTag::Crystal,
    KindTag::Portal,
    KindTag::LocalPortal,
    KindTag::HealthPickup,
    KindTag::Key,
    KindTag::Fence,
];

/// Something in the scene the player can overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEntity {
    pub id: EntityId,
    /// World position
    #[serde(default)]
    pub position: [f32; 3],
    /// Trigger sphere radius
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Attached behaviours
    #[serde(default)]
    pub kinds: Vec<EntityKind>,
}

fn default_radius() -> f32 {
    0.5
}

impl WorldEntity {
    /// Create an entity with no behaviours at the origin
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: [0.0, 0.0, 0.0],
            radius: default_radius(),
            kinds: Vec::new(),
        }
    }

    /// Set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position.to_array();
        self
    }

    /// Set trigger radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Attach a behaviour
    pub fn with_kind(mut self, kind: EntityKind) -> Self {
        self.kinds.push(kind);
        self
    }

    /// World position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Does the entity carry this kind
    pub fn has(&self, tag: KindTag) -> bool {
        self.kinds.iter().any(|k| k.tag() == tag)
    }
}
