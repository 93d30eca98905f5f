//! Layer configuration.

use serde::{Deserialize, Serialize};

use super::gate::GateInfo;
use super::ids::GateId;

/// Direction in which a layer divides the marble grid into tracks.
///
/// A horizontal layer has one track per grid row, a vertical layer one
/// track per grid column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// One layer: an orientation plus exactly three gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerInfo {
    pub orientation: Orientation,
    pub gates: [GateInfo; 3],
}

impl LayerInfo {
    #[must_use]
    pub const fn new(orientation: Orientation, gates: [GateInfo; 3]) -> Self {
        Self { orientation, gates }
    }

    #[must_use]
    pub fn gate(&self, gate: GateId) -> &GateInfo {
        &self.gates[gate.index()]
    }

    pub fn gate_mut(&mut self, gate: GateId) -> &mut GateInfo {
        &mut self.gates[gate.index()]
    }
}
