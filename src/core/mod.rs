//! Core board types: identifiers, colors, gates, layers, marbles, the board
//! snapshot, configuration, errors and RNG.
//!
//! Everything here is plain data. The drop rules live in [`crate::rules`]
//! and the pre-game allocation in [`crate::builder`].

pub mod ids;
pub mod color;
pub mod gate;
pub mod layer;
pub mod marble;
pub mod board;
pub mod config;
pub mod error;
pub mod rng;

pub use ids::{GateId, LayerId, MarbleId};
pub use color::{Color, ColorMap};
pub use gate::{Extension, GateDepth, GateInfo, GateType};
pub use layer::{LayerInfo, Orientation};
pub use marble::{MarbleDepth, MarbleInfo};
pub use board::Board;
pub use config::RulesConfig;
pub use error::{BuildError, RulesError};
pub use rng::GameRng;
