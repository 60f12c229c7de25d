//! Level unlock watermark and level-exit teleport

use crate::level::SceneDirector;
use crate::prefs::{PrefsStore, SaveError};

/// Prefs key of the furthest-unlocked level
pub const LEVELS_KEY: &str = "levels";

/// Owns the persisted unlock watermark
pub struct ProgressionGate {
    prefs: Box<dyn PrefsStore>,
}

impl ProgressionGate {
    /// Create a gate over a prefs store
    pub fn new(prefs: Box<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Furthest level unlocked so far
    pub fn furthest_unlocked(&self) -> i32 {
        self.prefs.get_int(LEVELS_KEY, 0)
    }

    /// May the player select this level
    pub fn is_level_unlocked(&self, index: usize) -> bool {
        i64::try_from(index).map_or(false, |i| i <= i64::from(self.furthest_unlocked()))
    }

    /// Raise the watermark to the level after the active one.
    ///
    /// Only moves forward, and never past the last scene. Returns whether the
    /// watermark changed.
    pub fn unlock_next_level(&mut self, scenes: &dyn SceneDirector) -> Result<bool, SaveError> {
        let current = scenes.active_scene_index() as i64;
        let watermark = i64::from(self.furthest_unlocked());
        let next = current + 1;

        if current >= watermark && next < scenes.scene_count() as i64 {
            let value = i32::try_from(next).unwrap_or(i32::MAX);
            self.prefs.set_int(LEVELS_KEY, value)?;
            log::info!("Unlocked level {}", value);
            return Ok(true);
        }

        Ok(false)
    }

    /// Unlock the next level, then load `target`.
    ///
    /// The scene is loaded even if the watermark could not be written; the
    /// write error is returned afterwards.
    pub fn teleport(&mut self, target: usize, scenes: &mut dyn SceneDirector) -> Result<(), SaveError> {
        let unlocked = self.unlock_next_level(&*scenes);
        log::info!("Teleporting to scene {}", target);
        scenes.load_scene(target);
        unlocked.map(|_| ())
    }

    /// The underlying store
    pub fn prefs(&self) -> &dyn PrefsStore {
        self.prefs.as_ref()
    }
}
