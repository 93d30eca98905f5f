//! Marble state.
//!
//! A marble's depth is the layer it rests on (`0..=3`), or
//! [`MarbleDepth::FALLEN`] once it has dropped through the whole board.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::RulesError;
use super::ids::LayerId;

/// Resting depth of a marble, `0..=4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MarbleDepth(u8);

impl MarbleDepth {
    /// Resting on the top layer.
    pub const TOP: MarbleDepth = MarbleDepth(0);

    /// Fallen through the bottom layer. Terminal.
    pub const FALLEN: MarbleDepth = MarbleDepth(4);

    pub fn new(raw: u8) -> Result<Self, RulesError> {
        if raw <= Self::FALLEN.0 {
            Ok(Self(raw))
        } else {
            Err(RulesError::InvalidMarbleDepth(raw))
        }
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_fallen(self) -> bool {
        self.0 == Self::FALLEN.0
    }

    /// The layer this marble rests on, or `None` once fallen.
    #[must_use]
    pub fn resting_layer(self) -> Option<LayerId> {
        LayerId::new(self.0).ok()
    }

    /// Check if the marble rests exactly on `layer`.
    #[must_use]
    pub const fn rests_on(self, layer: LayerId) -> bool {
        self.0 == layer.raw()
    }

    /// Drop one layer. `None` if already fallen.
    #[must_use]
    pub fn dropped(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Lift back up by `amount` layers. `None` if that would go above the top.
    #[must_use]
    pub fn lifted(self, amount: u8) -> Option<Self> {
        self.0.checked_sub(amount).map(Self)
    }
}

impl TryFrom<u8> for MarbleDepth {
    type Error = RulesError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<MarbleDepth> for u8 {
    fn from(depth: MarbleDepth) -> u8 {
        depth.0
    }
}

/// One marble: where it rests and who it belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleInfo {
    pub depth: MarbleDepth,
    pub color: Color,
}

impl MarbleInfo {
    /// Create a marble resting on the top layer.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            depth: MarbleDepth::TOP,
            color,
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: MarbleDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Check if the marble is still on the board.
    #[must_use]
    pub const fn in_play(&self) -> bool {
        !self.depth.is_fallen()
    }
}
