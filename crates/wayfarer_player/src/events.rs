//! Output events
//!
//! Everything the controller asks of the animator, the HUD and the world is
//! queued as a `PlayerEvent` and drained by the host after each call.

use wayfarer_hud::HudCommand;
use wayfarer_triggers::EntityId;

/// One-shot animation triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    /// Basic weapon attack
    Attack,
    /// Charged ability
    Ability,
    /// Death
    Die,
}

impl AnimationTrigger {
    /// Animator parameter name
    pub fn name(self) -> &'static str {
        match self {
            AnimationTrigger::Attack => "Attack",
            AnimationTrigger::Ability => "Ability",
            AnimationTrigger::Die => "DieTrigger",
        }
    }
}

/// Animator parameter updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCommand {
    /// Locomotion blend: the state's target value and the damped value to show
    Blend { target: f32, value: f32 },
    /// Jumping flag, sent every frame
    Jumping(bool),
    /// Fire a trigger
    Trigger(AnimationTrigger),
}

/// Requests for the engine-owned world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldCommand {
    /// Destroy an entity
    Despawn(EntityId),
    /// A fence on this entity opened
    OpenFence(EntityId),
    /// Play the level exit's unlock effect
    PlayUnlockParticles,
}

/// Everything the controller emits
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Animation(AnimationCommand),
    Hud(HudCommand),
    World(WorldCommand),
}

impl PlayerEvent {
    /// Shorthand for a trigger event
    pub fn trigger(trigger: AnimationTrigger) -> Self {
        PlayerEvent::Animation(AnimationCommand::Trigger(trigger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_names() {
        assert_eq!(AnimationTrigger::Attack.name(), "Attack");
        assert_eq!(AnimationTrigger::Ability.name(), "Ability");
        assert_eq!(AnimationTrigger::Die.name(), "DieTrigger");
    }
}
