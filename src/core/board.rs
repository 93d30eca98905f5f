//! Board snapshot: every layer and every marble.
//!
//! `Board` is the value the renderer reads after construction and after
//! every move. It always holds exactly 4 layers of 3 gates and 9 marbles;
//! the array types make any other shape unrepresentable.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::gate::GateInfo;
use super::ids::{GateId, LayerId, MarbleId};
use super::layer::LayerInfo;
use super::marble::MarbleInfo;

/// Complete gate and marble configuration of one board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    layers: [LayerInfo; 4],
    marbles: [MarbleInfo; 9],
}

impl Board {
    /// Create a board from its layers (top first) and its marbles (row-major).
    #[must_use]
    pub const fn new(layers: [LayerInfo; 4], marbles: [MarbleInfo; 9]) -> Self {
        Self { layers, marbles }
    }

    // === Layers and gates ===

    #[must_use]
    pub fn layers(&self) -> &[LayerInfo; 4] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, layer: LayerId) -> &LayerInfo {
        &self.layers[layer.index()]
    }

    #[must_use]
    pub fn gate(&self, layer: LayerId, gate: GateId) -> &GateInfo {
        self.layer(layer).gate(gate)
    }

    pub(crate) fn gate_mut(&mut self, layer: LayerId, gate: GateId) -> &mut GateInfo {
        self.layers[layer.index()].gate_mut(gate)
    }

    /// Iterate over every (layer, gate) position, top layer first.
    pub fn gate_positions() -> impl Iterator<Item = (LayerId, GateId)> {
        LayerId::all().flat_map(|layer| GateId::all().map(move |gate| (layer, gate)))
    }

    // === Marbles ===

    #[must_use]
    pub fn marbles(&self) -> &[MarbleInfo; 9] {
        &self.marbles
    }

    #[must_use]
    pub fn marble(&self, marble: MarbleId) -> &MarbleInfo {
        &self.marbles[marble.index()]
    }

    pub(crate) fn marble_mut(&mut self, marble: MarbleId) -> &mut MarbleInfo {
        &mut self.marbles[marble.index()]
    }

    /// Count marbles of `color` still on the board.
    #[must_use]
    pub fn marbles_in_play(&self, color: Color) -> usize {
        self.marbles
            .iter()
            .filter(|m| m.color == color && m.in_play())
            .count()
    }

    /// Count marbles of `color` that have fallen through the board.
    #[must_use]
    pub fn marbles_fallen(&self, color: Color) -> usize {
        self.marbles
            .iter()
            .filter(|m| m.color == color && !m.in_play())
            .count()
    }
}
