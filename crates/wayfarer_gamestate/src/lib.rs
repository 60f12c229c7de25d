//! Wayfarer GameState - Scene Progression
//!
//! Decides where a level exit leads and remembers the furthest level the
//! player has unlocked across sessions.
//!
//! # Features
//!
//! - `PrefsStore`: integer key/value settings (in-memory or file-backed)
//! - `SceneDirector`: the scene loader seam, with `SceneList` as a concrete list
//! - `ProgressionGate`: level-unlock watermark and teleport
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_gamestate::prelude::*;
//!
//! let prefs = FilePrefs::open("prefs.json", SaveFormat::Json)?;
//! let mut gate = ProgressionGate::new(Box::new(prefs));
//! let mut scenes = SceneList::new(["intro", "forest", "caves"]);
//!
//! let target = next_scene_index(scenes.active_scene_index(), scenes.scene_count());
//! gate.teleport(target, &mut scenes)?;
//! ```

pub mod level;
pub mod prefs;
pub mod progress;

pub mod prelude {
    pub use crate::level::{next_scene_index, SceneDirector, SceneList};
    pub use crate::prefs::{FilePrefs, MemoryPrefs, PrefsStore, SaveError, SaveFormat};
    pub use crate::progress::{ProgressionGate, LEVELS_KEY};
}

pub use prelude::*;
