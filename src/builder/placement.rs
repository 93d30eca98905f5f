//! Placement records kept by the builder for undo.

use serde::{Deserialize, Serialize};

use crate::core::{Color, GateId, GateInfo, LayerId, MarbleId, Orientation};

/// One placement made while building a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// A gate was set on a layer.
    Gate {
        layer: LayerId,
        gate: GateId,
        orientation: Orientation,
        info: GateInfo,
    },

    /// A marble was given a color.
    Marble { marble: MarbleId, color: Color },
}

impl Placement {
    /// Color that made this placement.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Placement::Gate { info, .. } => info.owner,
            Placement::Marble { color, .. } => *color,
        }
    }
}
