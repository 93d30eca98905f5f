//! Pre-game board allocation.
//!
//! Before play, both players place their sliders and marble colors. The
//! builder validates every placement against the per-color inventories and
//! the board shape, supports undo, and produces the starting [`Board`]
//! snapshot for [`GameState`].
//!
//! [`Board`]: crate::core::Board
//! [`GameState`]: crate::rules::GameState

mod board_builder;
mod inventory;
mod placement;

pub use board_builder::BoardBuilder;
pub use inventory::{Inventory, STARTING_STOCK};
pub use placement::Placement;
