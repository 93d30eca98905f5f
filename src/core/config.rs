//! Rules configuration.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Options controlling how a game is played.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Color that moves first.
    pub starting_color: Color,

    /// Reject `play` on gates owned by the color not at play.
    /// `shift` never checks ownership.
    pub enforce_ownership: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_color: Color::Silver,
            enforce_ownership: true,
        }
    }
}

impl RulesConfig {
    /// Set the color that moves first.
    #[must_use]
    pub fn with_starting_color(mut self, color: Color) -> Self {
        self.starting_color = color;
        self
    }

    /// Turn ownership checks in `play` on or off.
    #[must_use]
    pub fn with_ownership_checks(mut self, enforce: bool) -> Self {
        self.enforce_ownership = enforce;
        self
    }
}
