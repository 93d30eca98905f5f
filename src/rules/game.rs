//! Game state machine.
//!
//! `GameState` owns the board, the move history and the color at play.
//!
//! - [`GameState::shift`] is the raw rules primitive: open a gate one step,
//!   settle the board, record the result. It checks no ownership and does
//!   not change the turn.
//! - [`GameState::play`] is the turn-aware entry point: it checks that the
//!   gate belongs to the color at play (unless disabled in
//!   [`RulesConfig`]), shifts, and passes the turn.
//! - [`GameState::undo`] reverses the most recent move exactly, using the
//!   recorded drops rather than re-running the rules.
//!
//! ## Example
//!
//! ```
//! use marble_drop::builder::BoardBuilder;
//! use marble_drop::core::RulesConfig;
//!
//! let mut game = BoardBuilder::random(7).unwrap().finish(RulesConfig::default()).unwrap();
//! let before = game.clone();
//!
//! if let Some(&(layer, gate)) = game.legal_shifts().first() {
//!     game.play(layer, gate).unwrap();
//!     assert!(game.undo());
//!     assert_eq!(game, before);
//! }
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use crate::core::{
    Board, Color, GateId, GateInfo, LayerId, LayerInfo, MarbleDepth, MarbleId, MarbleInfo,
    RulesConfig, RulesError,
};

use super::history::{Drops, MoveRecord};
use super::sweep::sweep;

/// Board, history and turn for one game.
///
/// Cloning is cheap: the history is a persistent vector. Deserializing
/// checks that every recorded move can be undone on the stored board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SavedGame", into = "SavedGame")]
pub struct GameState {
    board: Board,
    history: Vector<MoveRecord>,
    color_at_play: Color,
    config: RulesConfig,
}

impl GameState {
    /// Start a game with default rules and the given first color.
    ///
    /// Any marble already able to fall under the initial gates does so
    /// before play starts.
    #[must_use]
    pub fn new(board: Board, starting_color: Color) -> Self {
        Self::from_parts(board, RulesConfig::default().with_starting_color(starting_color))
    }

    /// Start a game with explicit rules.
    #[must_use]
    pub fn from_parts(mut board: Board, config: RulesConfig) -> Self {
        let settled = sweep(&mut board);
        debug!(
            settled = settled.len(),
            starting = %config.starting_color,
            "game constructed"
        );

        Self {
            board,
            history: Vector::new(),
            color_at_play: config.starting_color,
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn layer(&self, layer: LayerId) -> &LayerInfo {
        self.board.layer(layer)
    }

    #[must_use]
    pub fn gate(&self, layer: LayerId, gate: GateId) -> &GateInfo {
        self.board.gate(layer, gate)
    }

    #[must_use]
    pub fn marble(&self, marble: MarbleId) -> &MarbleInfo {
        self.board.marble(marble)
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // === Turn ===

    #[must_use]
    pub fn color_at_play(&self) -> Color {
        self.color_at_play
    }

    /// Hand the turn to the other color.
    ///
    /// For callers driving turns themselves around [`GameState::shift`].
    pub fn pass_turn(&mut self) {
        self.color_at_play = self.color_at_play.opponent();
    }

    /// Gates the color at play may shift: owned by it and not fully open.
    #[must_use]
    pub fn legal_shifts(&self) -> Vec<(LayerId, GateId)> {
        Board::gate_positions()
            .filter(|&(layer, gate)| {
                let info = self.board.gate(layer, gate);
                info.owner == self.color_at_play && !info.depth.is_max()
            })
            .collect()
    }

    #[must_use]
    pub fn marbles_in_play(&self, color: Color) -> usize {
        self.board.marbles_in_play(color)
    }

    #[must_use]
    pub fn marbles_fallen(&self, color: Color) -> usize {
        self.board.marbles_fallen(color)
    }

    // === Moves ===

    /// Open `gate` on `layer` by one step and settle the board.
    ///
    /// Returns how far each marble fell. Rejected without change if the
    /// gate is already fully open.
    #[instrument(level = "debug", skip(self))]
    pub fn shift(&mut self, layer: LayerId, gate: GateId) -> Result<Drops, RulesError> {
        self.apply(layer, gate, false)
    }

    /// Shift a gate as the color at play and pass the turn.
    ///
    /// With ownership checks on, rejects gates owned by the opponent.
    #[instrument(level = "debug", skip(self), fields(at_play = %self.color_at_play))]
    pub fn play(&mut self, layer: LayerId, gate: GateId) -> Result<Drops, RulesError> {
        let owner = self.board.gate(layer, gate).owner;
        if self.config.enforce_ownership && owner != self.color_at_play {
            return Err(RulesError::NotYourGate {
                layer,
                gate,
                owner,
                at_play: self.color_at_play,
            });
        }

        let drops = self.apply(layer, gate, true)?;
        self.pass_turn();
        Ok(drops)
    }

    fn apply(&mut self, layer: LayerId, gate: GateId, turn_passed: bool) -> Result<Drops, RulesError> {
        let info = self.board.gate_mut(layer, gate);
        let deeper = info
            .depth
            .deeper()
            .ok_or(RulesError::GateFullyOpen { layer, gate })?;
        info.depth = deeper;

        let drops = sweep(&mut self.board);
        debug!(depth = deeper.raw(), moved = drops.len(), "gate shifted");

        self.history
            .push_back(MoveRecord::new(layer, gate, drops.clone(), turn_passed));
        Ok(drops)
    }

    /// Reverse the most recent move.
    ///
    /// Returns `false`, changing nothing, when there is no history. A record
    /// that cannot be reversed on the current board is left in place and
    /// also yields `false`.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> bool {
        let Some(record) = self.history.back() else {
            debug!("nothing to undo");
            return false;
        };

        if let Err(err) = reverse(&mut self.board, record) {
            warn!(%err, "move left in history");
            return false;
        }

        let turn_passed = record.turn_passed;
        debug!(
            layer = %record.layer,
            gate = %record.gate,
            restored = record.drops.len(),
            "move undone"
        );

        self.history.pop_back();
        if turn_passed {
            self.pass_turn();
        }
        true
    }
}

/// Undo one record on `board`: close the gate a step and lift every marble
/// it dropped. Either every change applies or none does.
fn reverse(board: &mut Board, record: &MoveRecord) -> Result<(), RulesError> {
    let irreversible = || RulesError::IrreversibleMove {
        layer: record.layer,
        gate: record.gate,
    };

    let depth = board
        .gate(record.layer, record.gate)
        .depth
        .shallower()
        .ok_or_else(irreversible)?;
    let lifted = record
        .drops
        .iter()
        .map(|(marble, amount)| {
            let depth = board.marble(marble).depth.lifted(amount)?;
            Some((marble, depth))
        })
        .collect::<Option<SmallVec<[(MarbleId, MarbleDepth); 9]>>>()
        .ok_or_else(irreversible)?;

    board.gate_mut(record.layer, record.gate).depth = depth;
    for (marble, depth) in lifted {
        board.marble_mut(marble).depth = depth;
    }
    Ok(())
}

/// Serialized form of [`GameState`], validated on the way back in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct SavedGame {
    board: Board,
    history: Vector<MoveRecord>,
    color_at_play: Color,
    config: RulesConfig,
}

impl From<GameState> for SavedGame {
    fn from(game: GameState) -> Self {
        Self {
            board: game.board,
            history: game.history,
            color_at_play: game.color_at_play,
            config: game.config,
        }
    }
}

impl TryFrom<SavedGame> for GameState {
    type Error = RulesError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let mut board = saved.board.clone();
        for record in saved.history.iter().rev() {
            reverse(&mut board, record)?;
        }

        Ok(Self {
            board: saved.board,
            history: saved.history,
            color_at_play: saved.color_at_play,
            config: saved.config,
        })
    }
}
