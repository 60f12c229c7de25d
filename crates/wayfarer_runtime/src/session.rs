//! Headless play session
//!
//! Owns everything the engine would: the live entities, the scene list, the
//! HUD and the stand-in physics. Each step ticks the controller, resolves
//! overlaps and routes the controller's events to whoever handles them.

use wayfarer_gamestate::{FilePrefs, MemoryPrefs, PrefsStore, ProgressionGate, SceneDirector, SceneList};
use wayfarer_hud::Hud;
use wayfarer_math::Vec2;
use wayfarer_player::{CharacterController, FrameInput, PlayerEvent, WorldCommand};
use wayfarer_triggers::{EntityId, OverlapEventType, TriggerSystem};

use crate::session_config::{PrefsConfig, SceneConfig, ScriptStep, SessionConfig, SessionError};
use crate::world::{ClipTimer, FlatGround, TopDownCamera};

/// Trigger subject id used for the player
pub const PLAYER_ENTITY: EntityId = EntityId(0);

/// What happened over a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub frames: u64,
    pub scene: String,
    pub score: i32,
    pub health: i32,
    pub is_dead: bool,
    pub furthest_unlocked: i32,
    pub scenes_loaded: Vec<usize>,
    pub entities_remaining: usize,
    /// Last animator trigger fired
    pub last_animation: Option<&'static str>,
    /// An attack or ability clip was still playing at the end
    pub clip_playing: bool,
}

/// A running session
pub struct Session {
    scene_configs: Vec<SceneConfig>,
    body_radius: f32,
    delta_time: f32,
    controller: CharacterController,
    triggers: TriggerSystem,
    scenes: SceneList,
    hud: Hud,
    animator: ClipTimer,
    clip_length: f32,
    ground: FlatGround,
    camera: TopDownCamera,
    frames: u64,
    /// Scene loads already applied to the world
    loaded_scenes: usize,
}

impl Session {
    /// Set up the first scene
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        if config.scenes.is_empty() {
            return Err(SessionError::NoScenes);
        }
        config.player.validate()?;

        let prefs = open_prefs(&config.prefs)?;
        let gate = ProgressionGate::new(prefs);
        log::info!("Levels unlocked so far: {}", gate.furthest_unlocked());

        let scenes = SceneList::new(config.scenes.iter().map(|s| s.name.clone()));

        let mut session = Self {
            scene_configs: config.scenes.clone(),
            body_radius: config.world.body_radius,
            delta_time: config.delta_time(),
            controller: CharacterController::new(config.player.clone(), gate),
            triggers: TriggerSystem::new(),
            scenes,
            hud: Hud::new(),
            animator: ClipTimer::new(config.world.attack_clip_seconds),
            clip_length: config.world.attack_clip_seconds,
            ground: FlatGround::from_config(&config.world),
            camera: TopDownCamera::new(config.world.camera_height),
            frames: 0,
            loaded_scenes: 0,
        };
        session.populate_scene(0);
        Ok(session)
    }

    /// Play a script to the end or until the player dies
    pub fn run(&mut self, script: &[ScriptStep]) -> SessionReport {
        'script: for step in script {
            for frame in 0..step.frames {
                if self.controller.is_dead() {
                    log::info!("Player is dead, stopping after {} frames", self.frames);
                    break 'script;
                }
                self.play_frame(step, frame == 0);
            }
        }
        self.report()
    }

    /// Play one frame of a script step
    pub fn play_frame(&mut self, step: &ScriptStep, first_frame: bool) {
        let mut input = FrameInput::new()
            .with_forward(step.forward)
            .with_strafe(step.strafe);
        if let Some([x, y]) = step.pointer {
            input = input.with_pointer(x, y);
        } else {
            input.pointer = self.pointer_ahead();
        }

        if first_frame {
            if step.jump {
                input = input.with_jump();
            }
            if step.fire {
                input = input.with_fire();
            }
            for _ in 0..step.weapon_hits {
                self.controller.record_weapon_hit();
            }
            if let Some(damage) = step.damage {
                self.controller.apply_damage(damage);
            }
        }

        self.step(&input);
    }

    /// Advance the world by one frame
    pub fn step(&mut self, input: &FrameInput) {
        let dt = self.delta_time;
        self.frames += 1;

        self.controller.tick(input, dt, &self.ground, &self.camera);
        self.dispatch_events();

        if self.animator.update(dt) {
            self.controller.on_attack_animation_finished();
        }

        self.resolve_overlaps();
        self.dispatch_events();

        if self.scene_load_pending() {
            self.change_scene(self.scenes.active_scene_index());
        }
    }

    fn resolve_overlaps(&mut self) {
        self.triggers.update(
            self.delta_time,
            PLAYER_ENTITY,
            self.controller.position(),
            self.body_radius,
        );

        for event in self.triggers.drain_events() {
            if event.event_type != OverlapEventType::Enter {
                continue;
            }
            // A teleport mid-loop replaces the scene; later events are stale
            if self.scene_load_pending() {
                break;
            }
            if let Some(entity) = self.triggers.get_mut(event.entity) {
                self.controller.on_overlap(entity, &mut self.scenes);
            }
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.controller.drain_events() {
            match event {
                PlayerEvent::Animation(command) => self.animator.apply(&command),
                PlayerEvent::Hud(command) => self.hud.apply(&command),
                PlayerEvent::World(WorldCommand::Despawn(id)) => {
                    self.triggers.despawn(id);
                }
                PlayerEvent::World(WorldCommand::OpenFence(id)) => {
                    log::info!("Fence on {} opened", id);
                }
                PlayerEvent::World(WorldCommand::PlayUnlockParticles) => {
                    log::info!("Level exit unlocked");
                }
            }
        }
    }

    /// Reload after a scene load: fresh entities, HUD and character. The
    /// unlock watermark stays with the character's progression gate.
    fn change_scene(&mut self, index: usize) {
        self.controller.restart();
        self.hud = Hud::new();
        self.animator = ClipTimer::new(self.clip_length);
        self.populate_scene(index);
    }

    fn populate_scene(&mut self, index: usize) {
        self.triggers.clear();
        if let Some(scene) = self.scene_configs.get(index) {
            for entity in &scene.entities {
                self.triggers.spawn(entity.clone());
            }
            log::info!("Scene '{}' ready with {} entities", scene.name, scene.entities.len());
        }
        self.loaded_scenes = self.scenes.history().len();
    }

    fn scene_load_pending(&self) -> bool {
        self.scenes.history().len() > self.loaded_scenes
    }

    /// Keep facing along the current heading when the script gives no pointer
    fn pointer_ahead(&self) -> Vec2 {
        let ahead = self.controller.position() + self.controller.rotation().forward() * 5.0;
        Vec2::new(ahead.x, ahead.z)
    }

    /// Snapshot of the session so far
    pub fn report(&self) -> SessionReport {
        SessionReport {
            frames: self.frames,
            scene: self.scenes.active_name().unwrap_or_default().to_string(),
            score: self.controller.score(),
            health: self.controller.health().current(),
            is_dead: self.controller.is_dead(),
            furthest_unlocked: self.controller.progression().furthest_unlocked(),
            scenes_loaded: self.scenes.history().to_vec(),
            entities_remaining: self.triggers.entity_count(),
            last_animation: self.animator.last_trigger().map(|t| t.name()),
            clip_playing: self.animator.is_playing(),
        }
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }
}

fn open_prefs(config: &PrefsConfig) -> Result<Box<dyn PrefsStore>, SessionError> {
    match &config.path {
        Some(path) => Ok(Box::new(FilePrefs::open(path.clone(), config.format)?)),
        None => Ok(Box::new(MemoryPrefs::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_config::{PrefsConfig, WorldConfig};
    use wayfarer_gamestate::SaveFormat;
    use wayfarer_inventory::Coin;
    use wayfarer_math::Vec3;
    use wayfarer_triggers::{EntityKind, WorldEntity};

    fn entity(id: u64, z: f32, kind: EntityKind) -> WorldEntity {
        WorldEntity::new(EntityId(id))
            .with_position(Vec3::new(0.0, 0.0, z))
            .with_kind(kind)
    }

    fn scene(name: &str, entities: Vec<WorldEntity>) -> SceneConfig {
        SceneConfig {
            name: name.into(),
            entities,
        }
    }

    fn config(scenes: Vec<SceneConfig>) -> SessionConfig {
        SessionConfig {
            scenes,
            script: Vec::new(),
            ..SessionConfig::demo()
        }
    }

    fn walk(frames: u32) -> ScriptStep {
        ScriptStep {
            frames,
            forward: -1.0,
            ..Default::default()
        }
    }

    fn idle(frames: u32) -> ScriptStep {
        ScriptStep {
            frames,
            ..Default::default()
        }
    }

    #[test]
    fn test_walk_collects_coin() {
        let config = config(vec![scene("field", vec![entity(1, 3.0, EntityKind::Coin(Coin::new(5)))])]);
        let mut session = Session::new(&config).unwrap();
        assert_eq!(session.triggers.entity_count(), 1);

        let report = session.run(&[walk(40)]);

        assert_eq!(report.frames, 40);
        assert_eq!(report.score, 5);
        assert_eq!(report.entities_remaining, 0);
        assert_eq!(session.hud().summary(), "score '5', health 100%");
        assert!(session.controller.position().z > 3.0);
        assert!(!report.is_dead);
    }

    #[test]
    fn test_portal_unlocks_and_loads_next_scene() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.json");

        let mut config = config(vec![
            scene(
                "first",
                vec![
                    entity(1, 1.0, EntityKind::Coin(Coin::new(30))),
                    entity(2, 2.5, EntityKind::Crystal),
                    entity(3, 4.0, EntityKind::Portal),
                ],
            ),
            scene("second", vec![entity(1, 20.0, EntityKind::Coin(Coin::new(1)))]),
        ]);
        config.prefs = PrefsConfig {
            path: Some(prefs_path.clone()),
            format: SaveFormat::Json,
        };

        let mut session = Session::new(&config).unwrap();
        let wound = ScriptStep {
            damage: Some(30),
            ..idle(1)
        };
        let report = session.run(&[wound, walk(60)]);

        assert_eq!(report.scene, "second");
        assert_eq!(report.scenes_loaded, vec![1]);
        assert_eq!(report.furthest_unlocked, 1);
        // Fresh character and HUD in the new scene
        assert_eq!(report.score, 0);
        assert_eq!(report.health, 100);
        assert_eq!(session.hud().summary(), "score '0', health 100%");
        assert_eq!(report.entities_remaining, 1);
        assert!(session.controller.position().z < 4.0);

        // Watermark survives into the next session
        let again = Session::new(&config).unwrap();
        assert_eq!(again.report().furthest_unlocked, 1);
        assert_eq!(again.scenes.active_name(), Some("first"));
    }

    #[test]
    fn test_portal_closed_without_crystal_or_score() {
        let config = config(vec![
            scene(
                "first",
                vec![
                    entity(1, 1.0, EntityKind::Coin(Coin::new(20))),
                    entity(3, 4.0, EntityKind::Portal),
                ],
            ),
            scene("second", Vec::new()),
        ]);
        let mut session = Session::new(&config).unwrap();
        let report = session.run(&[walk(60)]);

        assert_eq!(report.scene, "first");
        assert!(report.scenes_loaded.is_empty());
        assert_eq!(report.furthest_unlocked, 0);
        assert_eq!(report.score, 20);
        // Portal stays in the world
        assert_eq!(report.entities_remaining, 1);
    }

    #[test]
    fn test_high_score_opens_portal() {
        let config = config(vec![
            scene(
                "first",
                vec![
                    entity(1, 1.0, EntityKind::Coin(Coin::new(30))),
                    entity(3, 4.0, EntityKind::Portal),
                ],
            ),
            scene("second", Vec::new()),
        ]);
        let mut session = Session::new(&config).unwrap();
        let report = session.run(&[walk(60)]);

        assert_eq!(report.scene, "second");
        assert_eq!(report.scenes_loaded, vec![1]);
    }

    #[test]
    fn test_death_ends_session() {
        let config = config(vec![scene("field", Vec::new())]);
        let mut session = Session::new(&config).unwrap();

        let lethal = ScriptStep {
            damage: Some(500),
            ..idle(1)
        };
        let report = session.run(&[lethal, idle(100)]);

        assert!(report.is_dead);
        assert_eq!(report.health, 0);
        assert_eq!(report.frames, 1);
        assert!(session.hud().game_over.is_visible());
        assert_eq!(session.hud().summary(), "score '0', health 0%, game over shown");
        assert_eq!(report.last_animation, Some("DieTrigger"));
        assert!(!report.clip_playing);
    }

    #[test]
    fn test_attack_clip_releases_lock() {
        let config = config(vec![scene("field", Vec::new())]);
        let mut session = Session::new(&config).unwrap();

        let swing = ScriptStep {
            fire: true,
            ..idle(10)
        };
        session.run(&[swing]);
        assert!(!session.controller.can_act());
        assert!(session.animator.is_playing());

        session.run(&[idle(30)]);
        assert!(session.controller.can_act());
        assert!(!session.animator.is_playing());
    }

    #[test]
    fn test_weapon_hits_charge_ability() {
        let config = config(vec![scene("field", Vec::new())]);
        let mut session = Session::new(&config).unwrap();

        let charged_swing = ScriptStep {
            fire: true,
            weapon_hits: 3,
            ..idle(1)
        };
        session.run(&[charged_swing]);

        let report = session.report();
        assert_eq!(report.last_animation, Some("Ability"));
        assert!(report.clip_playing);
        assert_eq!(session.controller.weapon().hits(), 0);
    }

    #[test]
    fn test_walking_off_the_edge_is_fatal() {
        let mut config = config(vec![scene("ledge", Vec::new())]);
        config.world = WorldConfig {
            ground_half_extent: Some(2.0),
            ..WorldConfig::default()
        };
        let mut session = Session::new(&config).unwrap();

        let report = session.run(&[walk(300)]);

        assert!(report.is_dead);
        assert!(report.frames < 300);
        assert!(session.controller.position().y < config.player.fall_death_height);
    }

    #[test]
    fn test_demo_session_runs() {
        let config = SessionConfig::demo();
        let mut session = Session::new(&config).unwrap();
        let report = session.run(&config.script);
        assert!(report.frames > 0);
        assert!(report.frames <= config.total_frames());
    }
}
