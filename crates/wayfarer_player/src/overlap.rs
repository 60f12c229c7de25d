//! Overlap resolution against typed world entities

use crate::controller::CharacterController;
use crate::events::{PlayerEvent, WorldCommand};
use wayfarer_gamestate::{next_scene_index, SceneDirector};
use wayfarer_hud::HudCommand;
use wayfarer_inventory::{Coin, HealthPickup, Key};
use wayfarer_math::Vec3;
use wayfarer_triggers::{EntityKind, WorldEntity, DISPATCH_ORDER};

impl CharacterController {
    /// Resolve an overlap with a world entity.
    ///
    /// Every kind the entity carries is handled, in `DISPATCH_ORDER`. An
    /// entity consumed by any kind gets a single despawn request. Overlaps
    /// are ignored once dead.
    pub fn on_overlap(&mut self, entity: &mut WorldEntity, scenes: &mut dyn SceneDirector) {
        if self.is_dead {
            return;
        }

        let id = entity.id;
        let mut consumed = false;

        for tag in DISPATCH_ORDER {
            for kind in entity.kinds.iter_mut().filter(|k| k.tag() == tag) {
                match kind {
                    EntityKind::Coin(coin) => {
                        self.collect_coin(*coin);
                        consumed = true;
                    }
                    EntityKind::Crystal => {
                        self.collect_crystal();
                        consumed = true;
                    }
                    EntityKind::Portal => self.enter_portal(scenes),
                    EntityKind::LocalPortal => self.enter_local_portal(),
                    EntityKind::HealthPickup(pickup) => {
                        consumed |= self.take_health_pickup(*pickup);
                    }
                    EntityKind::Key(key) => {
                        self.collect_key(*key);
                        consumed = true;
                    }
                    EntityKind::Fence(fence) => {
                        if fence.try_open(&self.keys) {
                            self.emit(PlayerEvent::World(WorldCommand::OpenFence(id)));
                        }
                    }
                }
            }
        }

        if consumed {
            self.emit(PlayerEvent::World(WorldCommand::Despawn(id)));
        }
    }

    fn collect_coin(&mut self, coin: Coin) {
        self.score = self.score.saturating_add(coin.score.max(0));
        log::debug!("Coin +{}, score {}", coin.score, self.score);
        self.emit(PlayerEvent::Hud(HudCommand::ScoreText(self.score.to_string())));
    }

    fn collect_crystal(&mut self) {
        self.has_progression_key = true;
        log::info!("Crystal collected, level exit unlocked");
        self.emit(PlayerEvent::World(WorldCommand::PlayUnlockParticles));
    }

    fn enter_portal(&mut self, scenes: &mut dyn SceneDirector) {
        let open = self.has_progression_key || self.score > self.config.portal_score_threshold;
        if !open {
            log::debug!(
                "Portal closed (score {} <= {}, no crystal)",
                self.score,
                self.config.portal_score_threshold
            );
            return;
        }

        let target = next_scene_index(scenes.active_scene_index(), scenes.scene_count());
        if let Err(e) = self.progression.teleport(target, scenes) {
            log::warn!("Failed to save level progress: {}", e);
        }
    }

    fn enter_local_portal(&mut self) {
        match self.config.teleport_anchor {
            Some(anchor) => {
                self.position = Vec3::from_array(anchor);
                log::debug!("Teleported to {:?}", anchor);
            }
            None => log::warn!("Local portal touched but no teleport anchor is configured"),
        }
    }

    /// Returns whether the pickup was used
    fn take_health_pickup(&mut self, pickup: HealthPickup) -> bool {
        if self.health.is_full() {
            return false;
        }

        let restored = self.health.heal(pickup.value);
        log::debug!("Healed {}, health {}", restored, self.health.current());
        self.emit(PlayerEvent::Hud(HudCommand::HealthFraction(self.health.fraction())));
        true
    }

    fn collect_key(&mut self, key: Key) {
        self.keys.collect(key.id);
    }
}
