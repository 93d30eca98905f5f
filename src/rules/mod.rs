//! Board rules: the drop engine and the game state machine.
//!
//! - `sweep`: which marbles fall through which gates, layer by layer
//! - `history`: per-marble drop results and move records
//! - `game`: `GameState`, with `shift`, `play` and `undo`

pub mod sweep;
pub mod history;
pub mod game;

pub use sweep::{drop_in_layer, drop_in_layer_ordered, drop_through_gate, relevant, sweep};
pub use history::{Drops, MoveRecord};
pub use game::GameState;
