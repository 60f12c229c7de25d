//! The player character controller

use crate::collaborators::{AimCamera, PhysicsWorld};
use crate::config::PlayerConfig;
use crate::events::{AnimationCommand, AnimationTrigger, PlayerEvent};
use crate::input::FrameInput;
use crate::locomotion::{BlendParameter, Locomotion};
use crate::timers::TimerQueue;
use wayfarer_combat::{ActionState, AttackGate, Health, Strike, Weapon};
use wayfarer_gamestate::ProgressionGate;
use wayfarer_hud::HudCommand;
use wayfarer_inventory::KeyRing;
use wayfarer_math::{Plane, Quat, Vec2, Vec3};

/// Work scheduled on the character's timer queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimedAction {
    /// Safety release of the lock taken by attack `sequence`
    ReleaseAttackLock { sequence: u64 },
}

/// Player character state machine
///
/// Owns all character state. Collaborators are passed in per call and all
/// outputs are queued as [`PlayerEvent`]s.
pub struct CharacterController {
    pub(crate) config: PlayerConfig,
    pub(crate) position: Vec3,
    pub(crate) rotation: Quat,
    pub(crate) health: Health,
    pub(crate) weapon: Weapon,
    pub(crate) attack_gate: AttackGate,
    pub(crate) keys: KeyRing,
    pub(crate) progression: ProgressionGate,
    pub(crate) score: i32,
    pub(crate) has_progression_key: bool,
    pub(crate) is_dead: bool,
    pub(crate) is_grounded: bool,
    pub(crate) is_jumping: bool,
    pub(crate) locomotion: Locomotion,
    pub(crate) move_direction: Vec3,
    pub(crate) vertical_velocity: f32,
    pub(crate) blend: BlendParameter,
    pub(crate) timers: TimerQueue<TimedAction>,
    pub(crate) events: Vec<PlayerEvent>,
}

impl CharacterController {
    /// Create a character at the configured spawn point
    pub fn new(config: PlayerConfig, progression: ProgressionGate) -> Self {
        Self {
            position: Vec3::from_array(config.spawn_position),
            rotation: Quat::IDENTITY,
            health: Health::new(config.max_health),
            weapon: Weapon::new(config.ability_hit_threshold),
            attack_gate: AttackGate::new(),
            keys: KeyRing::new(),
            progression,
            score: 0,
            has_progression_key: false,
            is_dead: false,
            is_grounded: false,
            is_jumping: false,
            locomotion: Locomotion::Idle,
            move_direction: Vec3::ZERO,
            vertical_velocity: 0.0,
            blend: BlendParameter::new(config.blend_damp_time),
            timers: TimerQueue::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Place the character
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Orient the character
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Use a specific weapon
    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = weapon;
        self
    }

    // ---- per-frame update ----

    /// Advance one simulation step
    pub fn tick(
        &mut self,
        input: &FrameInput,
        delta_time: f32,
        physics: &dyn PhysicsWorld,
        camera: &dyn AimCamera,
    ) {
        self.is_grounded = physics.check_sphere(
            self.position,
            self.config.ground_probe_radius,
            self.config.ground_layer_mask,
        );

        if self.is_dead {
            return;
        }

        for action in self.timers.advance(delta_time) {
            self.run_timed(action);
        }

        self.update_locomotion(input, delta_time);
        self.update_jump(input);

        if input.fire_pressed {
            self.attack();
        }

        let horizontal = self.move_direction * (delta_time * self.config.forward_speed);
        self.position = physics.sweep(self.position, horizontal);

        self.vertical_velocity += self.config.gravity * delta_time;
        let vertical = Vec3::new(0.0, self.vertical_velocity * delta_time, 0.0);
        self.position = physics.sweep(self.position, vertical);

        self.update_facing(input.pointer, delta_time, camera);

        if self.position.y < self.config.fall_death_height {
            log::info!("Fell below {:.1}", self.config.fall_death_height);
            self.die();
        }
    }

    fn update_locomotion(&mut self, input: &FrameInput, delta_time: f32) {
        let forward_axis = self.rotation.forward();
        let right_axis = self.rotation.right();
        self.move_direction = forward_axis * -input.forward + right_axis * input.strafe;

        self.locomotion = if self.attack_gate.can_act() {
            Locomotion::from_axes(input.forward, input.strafe)
        } else {
            Locomotion::Idle
        };

        if !self.locomotion.is_moving() {
            self.move_direction = Vec3::ZERO;
        }
        self.attack_gate.set_moving(self.locomotion.is_moving());

        let target = self.locomotion.blend_target();
        let value = self.blend.advance(target, delta_time);
        self.emit(PlayerEvent::Animation(AnimationCommand::Blend { target, value }));
    }

    fn update_jump(&mut self, input: &FrameInput) {
        self.is_jumping = input.jump_pressed && self.is_grounded;
        if self.is_jumping {
            self.vertical_velocity = self.config.jump_velocity();
            log::trace!("Jump, vertical velocity {:.2}", self.vertical_velocity);
        }
        self.emit(PlayerEvent::Animation(AnimationCommand::Jumping(self.is_jumping)));
    }

    fn attack(&mut self) {
        let Some(sequence) = self.attack_gate.try_lock() else {
            return;
        };

        let trigger = match self.weapon.strike() {
            Strike::Attack => AnimationTrigger::Attack,
            Strike::Ability => AnimationTrigger::Ability,
        };
        log::debug!("{} (attack #{})", trigger.name(), sequence);
        self.emit(PlayerEvent::trigger(trigger));

        if let Some(timeout) = self.config.attack_lock_timeout {
            self.timers
                .schedule(timeout, TimedAction::ReleaseAttackLock { sequence });
        }
    }

    fn update_facing(&mut self, pointer: Vec2, delta_time: f32, camera: &dyn AimCamera) {
        let ray = camera.screen_point_to_ray(pointer);
        if !ray.is_valid() {
            return;
        }

        let plane = Plane::horizontal_through(self.position);
        let Some(hit) = plane.raycast(&ray) else {
            return;
        };

        if let Some(target) = Quat::look_rotation(hit - self.position) {
            let t = (self.config.forward_speed * delta_time).clamp(0.0, 1.0);
            self.rotation = self.rotation.slerp(target, t).normalize();
        }
    }

    fn run_timed(&mut self, action: TimedAction) {
        match action {
            TimedAction::ReleaseAttackLock { sequence } => {
                if self.attack_gate.release_if_current(sequence) {
                    log::warn!("Attack #{} never reported finishing; lock released", sequence);
                }
            }
        }
    }

    // ---- external notifications ----

    /// The attack or ability animation finished playing
    pub fn on_attack_animation_finished(&mut self) {
        self.attack_gate.release();
    }

    /// The weapon connected with a target
    pub fn record_weapon_hit(&mut self) {
        self.weapon.record_hit();
    }

    /// Take damage. Ignored once dead.
    ///
    /// Damage interrupts an attack in progress, so the lock is lifted.
    pub fn apply_damage(&mut self, amount: i32) {
        if self.is_dead {
            log::debug!("Ignoring {} damage, already dead", amount);
            return;
        }

        self.attack_gate.release();
        let outcome = self.health.apply_damage(amount);
        log::debug!("Took {} damage, health {}", outcome.dealt, outcome.new_health);
        self.emit(PlayerEvent::Hud(HudCommand::HealthFraction(self.health.fraction())));

        if outcome.depleted {
            self.die();
        }
    }

    /// Enter the terminal dead state. Later calls do nothing.
    pub fn die(&mut self) {
        if self.is_dead {
            return;
        }

        log::info!("Player died (score {})", self.score);
        self.emit(PlayerEvent::trigger(AnimationTrigger::Die));
        self.is_dead = true;
        self.timers.cancel_all();
        self.emit(PlayerEvent::Hud(HudCommand::ShowGameOver));
    }

    // ---- events ----

    pub(crate) fn emit(&mut self, event: PlayerEvent) {
        self.events.push(event);
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Queued events without draining
    pub fn pending_events(&self) -> &[PlayerEvent] {
        &self.events
    }

    // ---- accessors ----

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Physics correction from the host
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// Locomotion and new attacks allowed
    pub fn can_act(&self) -> bool {
        self.attack_gate.can_act()
    }

    pub fn action_state(&self) -> ActionState {
        self.attack_gate.state()
    }

    pub fn locomotion(&self) -> Locomotion {
        self.locomotion
    }

    pub fn has_progression_key(&self) -> bool {
        self.has_progression_key
    }

    pub fn collected_keys(&self) -> &KeyRing {
        &self.keys
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Damped blend parameter value
    pub fn blend(&self) -> f32 {
        self.blend.value()
    }

    /// Timers still pending
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn progression(&self) -> &ProgressionGate {
        &self.progression
    }

    /// Give up the progression gate, e.g. to hand it to the next level's
    /// character
    pub fn into_progression(self) -> ProgressionGate {
        self.progression
    }

    /// Start over at the spawn point after a scene load.
    ///
    /// Everything but the config and the progression gate returns to its
    /// initial value; queued events and timers are dropped.
    pub fn restart(&mut self) {
        log::debug!("Character restarted at {:?}", self.config.spawn_position);
        self.position = Vec3::from_array(self.config.spawn_position);
        self.rotation = Quat::IDENTITY;
        self.health = Health::new(self.config.max_health);
        self.weapon = Weapon::new(self.config.ability_hit_threshold);
        self.attack_gate = AttackGate::new();
        self.keys = KeyRing::new();
        self.score = 0;
        self.has_progression_key = false;
        self.is_dead = false;
        self.is_grounded = false;
        self.is_jumping = false;
        self.locomotion = Locomotion::Idle;
        self.move_direction = Vec3::ZERO;
        self.vertical_velocity = 0.0;
        self.blend = BlendParameter::new(self.config.blend_damp_time);
        self.timers = TimerQueue::new();
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_gamestate::MemoryPrefs;
    use wayfarer_math::Ray;

    struct Ground(bool);

    impl PhysicsWorld for Ground {
        fn check_sphere(&self, _center: Vec3, _radius: f32, _mask: u32) -> bool {
            self.0
        }
    }

    struct NoAim;

    impl AimCamera for NoAim {
        fn screen_point_to_ray(&self, _screen: Vec2) -> Ray {
            Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::Y)
        }
    }

    fn controller() -> CharacterController {
        let gate = ProgressionGate::new(Box::new(MemoryPrefs::new()));
        CharacterController::new(PlayerConfig::default(), gate)
    }

    #[test]
    fn test_initial_state() {
        let player = controller();
        assert_eq!(player.health().current(), 100);
        assert!(player.can_act());
        assert!(!player.is_dead());
        assert_eq!(player.score(), 0);
        assert_eq!(player.action_state(), ActionState::Idle);
    }

    #[test]
    fn test_ground_check_runs_while_dead() {
        let mut player = controller();
        player.die();
        player.tick(&FrameInput::new(), 0.02, &Ground(true), &NoAim);
        assert!(player.is_grounded());
        player.tick(&FrameInput::new(), 0.02, &Ground(false), &NoAim);
        assert!(!player.is_grounded());
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut player = controller();
        player.tick(&FrameInput::new(), 0.1, &Ground(false), &NoAim);
        player.tick(&FrameInput::new(), 0.1, &Ground(false), &NoAim);
        assert!((player.vertical_velocity() - (-1.962)).abs() < 1e-4);
        assert!(player.position().y < 0.0);
    }

    #[test]
    fn test_die_cancels_timers() {
        let config = PlayerConfig {
            attack_lock_timeout: Some(2.0),
            ..Default::default()
        };
        let mut player =
            CharacterController::new(config, ProgressionGate::new(Box::new(MemoryPrefs::new())));
        player.tick(&FrameInput::new().with_fire(), 0.02, &Ground(true), &NoAim);
        assert_eq!(player.pending_timers(), 1);
        player.die();
        assert_eq!(player.pending_timers(), 0);
    }
}
