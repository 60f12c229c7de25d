//! Thread-safe handle to a character controller
//!
//! Hosts that deliver animation callbacks or damage from other threads go
//! through this handle so every mutation of the character is serialized.

use crate::controller::CharacterController;
use crate::events::PlayerEvent;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Cloneable, lock-protected controller
#[derive(Clone)]
pub struct SharedController {
    inner: Arc<Mutex<CharacterController>>,
}

impl SharedController {
    pub fn new(controller: CharacterController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Exclusive access for a batch of calls
    pub fn lock(&self) -> MutexGuard<'_, CharacterController> {
        self.inner.lock()
    }

    /// Animation-finished callback
    pub fn on_attack_animation_finished(&self) {
        self.inner.lock().on_attack_animation_finished();
    }

    /// Damage from any thread
    pub fn apply_damage(&self, amount: i32) {
        self.inner.lock().apply_damage(amount);
    }

    /// Weapon hit from any thread
    pub fn record_weapon_hit(&self) {
        self.inner.lock().record_weapon_hit();
    }

    pub fn drain_events(&self) -> Vec<PlayerEvent> {
        self.inner.lock().drain_events()
    }

    pub fn is_dead(&self) -> bool {
        self.inner.lock().is_dead()
    }
}
