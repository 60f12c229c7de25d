//! Score label and game-over panel

use serde::{Deserialize, Serialize};

/// Text label showing the score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreLabel {
    text: String,
}

impl ScoreLabel {
    pub fn new() -> Self {
        Self { text: "0".to_string() }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for ScoreLabel {
    fn default() -> Self {
        Self::new()
    }
}

/// Panel shown once the player dies
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameOverPanel {
    visible: bool,
}

impl GameOverPanel {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
