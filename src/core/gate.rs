//! Gate configuration.
//!
//! A gate is a slider sitting in one track of a layer. Its opening profile
//! is set by its [`GateType`], and shifting the gate increases its
//! [`GateDepth`], which progressively opens the track.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::RulesError;

/// Opening profile (width class) of a gate.
///
/// The discriminant is used directly as an arithmetic offset when
/// computing which slots of a track are open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateType {
    Furthest = 0,
    Mid = 1,
    Near = 2,
    /// Slider without a cut-out.
    Solid = 3,
}

impl GateType {
    /// All gate types in offset order.
    pub const ALL: [GateType; 4] = [GateType::Furthest, GateType::Mid, GateType::Near, GateType::Solid];

    /// Create a gate type from its offset value.
    pub fn new(raw: u8) -> Result<Self, RulesError> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(RulesError::InvalidGateType(raw))
    }

    /// Offset contributed to the open-slot computation.
    #[must_use]
    pub const fn offset(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for GateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateType::Furthest => write!(f, "furthest"),
            GateType::Mid => write!(f, "mid"),
            GateType::Near => write!(f, "near"),
            GateType::Solid => write!(f, "solid"),
        }
    }
}

/// How far a gate has been shifted open, `0..=3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GateDepth(u8);

impl GateDepth {
    /// Closed gate.
    pub const ZERO: GateDepth = GateDepth(0);

    /// Deepest position. Every slot of the track is open here.
    pub const MAX: GateDepth = GateDepth(3);

    /// Create a depth, rejecting values above [`GateDepth::MAX`].
    pub fn new(raw: u8) -> Result<Self, RulesError> {
        if raw <= Self::MAX.0 {
            Ok(Self(raw))
        } else {
            Err(RulesError::InvalidGateDepth(raw))
        }
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if the gate cannot be shifted any further.
    #[must_use]
    pub const fn is_max(self) -> bool {
        self.0 == Self::MAX.0
    }

    /// The next depth, or `None` when already at [`GateDepth::MAX`].
    #[must_use]
    pub fn deeper(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// The previous depth, or `None` when closed.
    #[must_use]
    pub fn shallower(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl TryFrom<u8> for GateDepth {
    type Error = RulesError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<GateDepth> for u8 {
    fn from(depth: GateDepth) -> u8 {
        depth.0
    }
}

/// Which end of its track a gate extends from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    TopLeft,
    BottomRight,
}

impl Extension {
    #[must_use]
    pub const fn is_top_left(self) -> bool {
        matches!(self, Extension::TopLeft)
    }
}

/// Full configuration of one gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GateInfo {
    /// Player allowed to shift this gate.
    pub owner: Color,

    /// Current shift depth.
    pub depth: GateDepth,

    /// Opening profile.
    pub gate_type: GateType,

    /// End of the track the slider extends from.
    pub extension: Extension,
}

impl GateInfo {
    /// Create a closed gate.
    #[must_use]
    pub const fn new(owner: Color, gate_type: GateType, extension: Extension) -> Self {
        Self {
            owner,
            depth: GateDepth::ZERO,
            gate_type,
            extension,
        }
    }

    /// Set the starting depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: GateDepth) -> Self {
        self.depth = depth;
        self
    }
}
