//! Error types for the rules engine and the board builder.
//!
//! Every fallible operation rejects its input before touching any state,
//! so an `Err` always means "nothing changed".

use thiserror::Error;

use super::color::Color;
use super::gate::GateType;
use super::ids::{GateId, LayerId, MarbleId};
use super::layer::Orientation;

/// Errors raised by board identifiers and the game state machine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RulesError {
    // Range errors
    #[error("layer index {0} out of range 0..4")]
    InvalidLayer(u8),

    #[error("gate index {0} out of range 0..3")]
    InvalidGate(u8),

    #[error("marble index {0} out of range 0..9")]
    InvalidMarble(u8),

    #[error("grid position ({row}, {column}) outside the 3x3 marble grid")]
    InvalidGridPosition { row: i8, column: i8 },

    #[error("gate type {0} out of range 0..4")]
    InvalidGateType(u8),

    #[error("gate depth {0} out of range 0..=3")]
    InvalidGateDepth(u8),

    #[error("marble depth {0} out of range 0..=4")]
    InvalidMarbleDepth(u8),

    // Move errors
    #[error("{gate} on {layer} is already fully open")]
    GateFullyOpen { layer: LayerId, gate: GateId },

    #[error("move on {gate} of {layer} cannot be reversed on this board")]
    IrreversibleMove { layer: LayerId, gate: GateId },

    #[error("{gate} on {layer} belongs to {owner}, but {at_play} is at play")]
    NotYourGate {
        layer: LayerId,
        gate: GateId,
        owner: Color,
        at_play: Color,
    },
}

/// Errors raised while allocating gates and marbles before a game.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("{color} has no {gate_type} gates left")]
    InventoryExhausted { color: Color, gate_type: GateType },

    #[error("{gate} on {layer} is already placed")]
    GateAlreadyPlaced { layer: LayerId, gate: GateId },

    #[error("{0} is already placed")]
    MarbleAlreadyPlaced(MarbleId),

    #[error("{layer} is fixed to {fixed}, cannot place a {requested} gate")]
    OrientationMismatch {
        layer: LayerId,
        fixed: Orientation,
        requested: Orientation,
    },

    #[error("{remaining} gates still need to be placed")]
    GatesIncomplete { remaining: usize },

    #[error("{remaining} marbles still need to be placed")]
    MarblesIncomplete { remaining: usize },
}
