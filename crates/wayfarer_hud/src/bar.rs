//! Health bar

use serde::{Deserialize, Serialize};

/// Text display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextFormat {
    /// Show percentage
    #[default]
    Percent,
    /// No text
    None,
}

/// Health bar widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthBar {
    /// Fill (0.0 - 1.0)
    fraction: f32,
    /// Text format
    pub text_format: TextFormat,
}

impl HealthBar {
    /// Create a full health bar showing a percentage
    pub fn new() -> Self {
        Self {
            fraction: 1.0,
            text_format: TextFormat::Percent,
        }
    }

    /// Change the text display
    pub fn with_text(mut self, format: TextFormat) -> Self {
        self.text_format = format;
        self
    }

    /// Set the fill (clamped to 0..1)
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    }

    /// Current fill
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Get text to display
    pub fn get_text(&self) -> String {
        match self.text_format {
            TextFormat::Percent => format!("{:.0}%", self.fraction * 100.0),
            TextFormat::None => String::new(),
        }
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_clamped() {
        let mut bar = HealthBar::new();
        bar.set_fraction(1.5);
        assert_eq!(bar.fraction(), 1.0);
        bar.set_fraction(-0.2);
        assert_eq!(bar.fraction(), 0.0);
        bar.set_fraction(f32::NAN);
        assert_eq!(bar.fraction(), 0.0);
    }

    #[test]
    fn test_percent_text_by_default() {
        let mut bar = HealthBar::new();
        assert_eq!(bar.get_text(), "100%");
        bar.set_fraction(0.7);
        assert_eq!(bar.get_text(), "70%");
    }

    #[test]
    fn test_text_hidden() {
        let mut bar = HealthBar::new().with_text(TextFormat::None);
        bar.set_fraction(0.4);
        assert_eq!(bar.get_text(), "");
    }
}
