//! Health value and damage resolution

use serde::{Deserialize, Serialize};

/// Result of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Health actually removed (negative when the amount healed)
    pub dealt: i32,
    /// Health after the change
    pub new_health: i32,
    /// Health reached zero
    pub depleted: bool,
}

/// Integer health pool, always within `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    /// Create a full health pool. Negative maxima are treated as zero.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Start at a specific value (clamped)
    pub fn with_current(mut self, current: i32) -> Self {
        self.current = current.clamp(0, self.max);
        self
    }

    /// Current health
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum health
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Subtract `amount` and clamp into `[0, max]`
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        let old = self.current;
        self.current = self.current.saturating_sub(amount).clamp(0, self.max);
        DamageOutcome {
            dealt: old - self.current,
            new_health: self.current,
            depleted: self.current <= 0,
        }
    }

    /// Add `amount` and clamp to `max`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = self.current.saturating_add(amount).clamp(0, self.max);
        self.current - old
    }

    /// Health as a fraction (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    /// Check if at full health
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Check if health has run out
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}
