//! # marble-drop
//!
//! Rules engine for a two-player marble-drop board game.
//!
//! ## The Board
//!
//! Four layers are stacked on top of each other. Each layer splits a 3x3
//! grid of marbles into three tracks, one per gate, either by rows
//! (horizontal) or by columns (vertical). Shifting a gate opens more of its
//! track; any marble sitting over an open slot falls to the next layer,
//! possibly cascading further down in the same move.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The same board and the same moves always give the
//!    same result. No randomness outside board set-up.
//!
//! 2. **Exactly Reversible**: Every move records precisely how far each
//!    marble fell, so `undo` restores the previous state bit for bit.
//!
//! 3. **Ranges in Types**: Layer, gate and marble ids and both depth kinds
//!    are range-checked newtypes. An invalid index cannot be constructed.
//!
//! ## Modules
//!
//! - `core`: Identifiers, colors, gates, layers, marbles, board, config, errors, RNG
//! - `geometry`: Track layout and open-slot arithmetic
//! - `rules`: Drop sweep, move history, `GameState`
//! - `builder`: Inventory-checked board allocation before a game

pub mod core;
pub mod geometry;
pub mod rules;
pub mod builder;

// Re-export commonly used types
pub use crate::core::{
    Board, BuildError, Color, ColorMap, Extension, GameRng, GateDepth, GateId, GateInfo, GateType,
    LayerId, LayerInfo, MarbleDepth, MarbleId, MarbleInfo, Orientation, RulesConfig, RulesError,
};

pub use crate::rules::{Drops, GameState, MoveRecord};

pub use crate::builder::{BoardBuilder, Inventory, Placement};
