//! Wayfarer HUD - Player Display Widgets
//!
//! Widgets driven by the character controller. The controller never touches
//! widgets directly; it emits `HudCommand`s which `Hud::apply` carries out.
//!
//! # Features
//!
//! - Health bar driven by a 0..1 fill fraction
//! - Score label
//! - Game-over panel
//!
//! # Example
//!
//! ```ignore
//! use wayfarer_hud::prelude::*;
//!
//! let mut hud = Hud::new();
//! hud.apply(&HudCommand::HealthFraction(0.5));
//! hud.apply(&HudCommand::ScoreText("12".into()));
//! log::info!("HUD: {}", hud.summary());
//! ```

pub mod bar;
pub mod panel;

use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use crate::bar::{HealthBar, TextFormat};
    pub use crate::panel::{GameOverPanel, ScoreLabel};
    pub use crate::{Hud, HudCommand};
}

pub use prelude::*;

/// Display update requested by gameplay code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HudCommand {
    /// Replace the score label text
    ScoreText(String),
    /// Set the health bar fill (0.0 - 1.0)
    HealthFraction(f32),
    /// Reveal the game-over panel
    ShowGameOver,
}

/// All player-facing widgets
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub health_bar: HealthBar,
    pub score: ScoreLabel,
    pub game_over: GameOverPanel,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Carry out a display command
    pub fn apply(&mut self, command: &HudCommand) {
        match command {
            HudCommand::ScoreText(text) => self.score.set_text(text.clone()),
            HudCommand::HealthFraction(fraction) => self.health_bar.set_fraction(*fraction),
            HudCommand::ShowGameOver => {
                log::info!("Game over");
                self.game_over.show();
            }
        }
    }

    /// One-line text readout of every widget
    pub fn summary(&self) -> String {
        let mut line = format!(
            "score '{}', health {}",
            self.score.text(),
            self.health_bar.get_text()
        );
        if self.game_over.is_visible() {
            line.push_str(", game over shown");
        }
        line
    }
}
