//! Attack gate
//!
//! `AttackGate` is the only writer of the character's action state. An
//! attack locks the gate; the lock is lifted by the animation-finished
//! acknowledgment, by taking damage, or by a timer that was armed for the
//! same attack.

use serde::{Deserialize, Serialize};

/// What the character is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActionState {
    /// Standing still, free to act
    #[default]
    Idle,
    /// Moving under player control
    Locomoting,
    /// Attack animation in flight, locomotion suppressed
    AttackLocked,
}

impl ActionState {
    /// Locomotion and new attacks are allowed
    pub fn can_act(self) -> bool {
        !matches!(self, ActionState::AttackLocked)
    }
}

/// Owner of the action state and the attack sequence number
#[derive(Debug, Clone, Default)]
pub struct AttackGate {
    state: ActionState,
    /// Incremented on every attack; identifies the current lock
    sequence: u64,
}

impl AttackGate {
    /// Create an idle gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> ActionState {
        self.state
    }

    /// Shorthand for `state().can_act()`
    pub fn can_act(&self) -> bool {
        self.state.can_act()
    }

    /// Sequence number of the most recent attack
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Record locomotion for this frame. Ignored while locked.
    pub fn set_moving(&mut self, moving: bool) {
        if self.state.can_act() {
            self.state = if moving {
                ActionState::Locomoting
            } else {
                ActionState::Idle
            };
        }
    }

    /// Lock for a new attack. Returns the attack's sequence number, or `None`
    /// when already locked.
    pub fn try_lock(&mut self) -> Option<u64> {
        if !self.state.can_act() {
            return None;
        }
        self.sequence += 1;
        self.state = ActionState::AttackLocked;
        Some(self.sequence)
    }

    /// Lift the lock unconditionally (animation finished, damage interrupt)
    pub fn release(&mut self) {
        if self.state == ActionState::AttackLocked {
            self.state = ActionState::Idle;
        }
    }

    /// Lift the lock only if it still belongs to attack `sequence`
    pub fn release_if_current(&mut self, sequence: u64) -> bool {
        if self.state == ActionState::AttackLocked && self.sequence == sequence {
            self.state = ActionState::Idle;
            true
        } else {
            false
        }
    }
}
