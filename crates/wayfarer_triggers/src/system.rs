//! Trigger system for processing overlaps

use crate::entity::{EntityId, WorldEntity};
use crate::events::OverlapEvent;
use std::collections::{BTreeMap, HashSet};
use wayfarer_math::{spheres_overlap, Vec3};

/// Owns the live world entities of a scene and tracks which of them the
/// subject currently overlaps
pub struct TriggerSystem {
    /// Live entities, iterated in id order
    entities: BTreeMap<EntityId, WorldEntity>,
    /// Entities the subject was inside after the last update
    overlapping: HashSet<EntityId>,
    /// Current simulation time
    current_time: f32,
    /// Collected events from last update
    last_events: Vec<OverlapEvent>,
}

impl TriggerSystem {
    /// Create an empty trigger system
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            overlapping: HashSet::new(),
            current_time: 0.0,
            last_events: Vec::new(),
        }
    }

    /// Add an entity, replacing any with the same id
    pub fn spawn(&mut self, entity: WorldEntity) {
        log::trace!("Spawned {}", entity.id);
        self.entities.insert(entity.id, entity);
    }

    /// Remove an entity
    pub fn despawn(&mut self, id: EntityId) -> Option<WorldEntity> {
        self.overlapping.remove(&id);
        let removed = self.entities.remove(&id);
        if removed.is_some() {
            log::debug!("Despawned {}", id);
        }
        removed
    }

    /// Remove everything (scene change)
    pub fn clear(&mut self) {
        self.entities.clear();
        self.overlapping.clear();
        self.last_events.clear();
    }

    /// Get an entity
    pub fn get(&self, id: EntityId) -> Option<&WorldEntity> {
        self.entities.get(&id)
    }

    /// Get a mutable entity
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut WorldEntity> {
        self.entities.get_mut(&id)
    }

    /// Iterate live entities in id order
    pub fn entities(&self) -> impl Iterator<Item = &WorldEntity> + '_ {
        self.entities.values()
    }

    /// Entity count
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Is the subject currently inside this entity's trigger
    pub fn is_inside(&self, id: EntityId) -> bool {
        self.overlapping.contains(&id)
    }

    /// Update overlaps for a subject sphere
    ///
    /// Emits an enter event the first update the subject touches an entity
    /// and an exit event once it leaves.
    pub fn update(&mut self, delta_time: f32, subject: EntityId, position: Vec3, radius: f32) {
        self.current_time += delta_time;
        self.last_events.clear();

        let mut currently_overlapping = HashSet::new();

        for entity in self.entities.values() {
            if entity.id == subject {
                continue;
            }

            if spheres_overlap(entity.position(), entity.radius, position, radius) {
                currently_overlapping.insert(entity.id);
                if !self.overlapping.contains(&entity.id) {
                    self.last_events
                        .push(OverlapEvent::enter(entity.id, subject, self.current_time));
                }
            }
        }

        let mut left: Vec<EntityId> = self
            .overlapping
            .difference(&currently_overlapping)
            .copied()
            .collect();
        left.sort();
        for id in left {
            self.last_events
                .push(OverlapEvent::exit(id, subject, self.current_time));
        }

        self.overlapping = currently_overlapping;
    }

    /// Get events from the last update
    pub fn get_events(&self) -> &[OverlapEvent] {
        &self.last_events
    }

    /// Drain events from the last update
    pub fn drain_events(&mut self) -> Vec<OverlapEvent> {
        std::mem::take(&mut self.last_events)
    }
}

impl Default for TriggerSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::events::OverlapEventType;
    use wayfarer_inventory::Coin;

    const PLAYER: EntityId = EntityId(0);

    fn coin_at(id: u64, x: f32) -> WorldEntity {
        WorldEntity::new(EntityId(id))
            .with_position(Vec3::new(x, 0.0, 0.0))
            .with_radius(0.5)
            .with_kind(EntityKind::Coin(Coin::new(1)))
    }

    #[test]
    fn test_spawn_despawn() {
        let mut system = TriggerSystem::new();
        system.spawn(coin_at(1, 0.0));
        assert_eq!(system.entity_count(), 1);
        assert!(system.despawn(EntityId(1)).is_some());
        assert!(system.despawn(EntityId(1)).is_none());
        assert_eq!(system.entity_count(), 0);
    }

    #[test]
    fn test_enter_fires_once() {
        let mut system = TriggerSystem::new();
        system.spawn(coin_at(1, 0.0));

        system.update(0.016, PLAYER, Vec3::new(0.2, 0.0, 0.0), 0.5);
        let events = system.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, OverlapEventType::Enter);
        assert_eq!(events[0].entity, EntityId(1));
        assert!(system.is_inside(EntityId(1)));

        system.update(0.016, PLAYER, Vec3::new(0.3, 0.0, 0.0), 0.5);
        assert!(system.get_events().is_empty());
    }

    #[test]
    fn test_exit() {
        let mut system = TriggerSystem::new();
        system.spawn(coin_at(1, 0.0));

        system.update(0.016, PLAYER, Vec3::ZERO, 0.5);
        system.update(0.016, PLAYER, Vec3::new(10.0, 0.0, 0.0), 0.5);
        let events = system.drain_events();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_exit());
        assert!(!system.is_inside(EntityId(1)));
    }

    #[test]
    fn test_enter_events_in_id_order() {
        let mut system = TriggerSystem::new();
        system.spawn(coin_at(7, 0.0));
        system.spawn(coin_at(2, 0.1));
        system.update(0.016, PLAYER, Vec3::ZERO, 0.5);
        let ids: Vec<_> = system.drain_events().iter().map(|e| e.entity).collect();
        assert_eq!(ids, vec![EntityId(2), EntityId(7)]);
    }

    #[test]
    fn test_despawned_entity_no_exit() {
        let mut system = TriggerSystem::new();
        system.spawn(coin_at(1, 0.0));
        system.update(0.016, PLAYER, Vec3::ZERO, 0.5);
        system.despawn(EntityId(1));
        system.update(0.016, PLAYER, Vec3::ZERO, 0.5);
        assert!(system.get_events().is_empty());
    }
}
