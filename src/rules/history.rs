//! Move records for exact undo.
//!
//! A sweep reports how far each marble fell as a [`Drops`] value. `shift`
//! stores that value verbatim in a [`MoveRecord`], so `undo` can reverse a
//! whole cascade without re-running the rules.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GateId, LayerId, MarbleId};

/// Per-marble depth increments produced by one sweep.
///
/// Marbles that did not move are omitted. Entries are kept sorted by
/// marble id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Drops {
    entries: SmallVec<[(MarbleId, u8); 9]>,
}

impl Drops {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a per-marble counter array, dropping zero entries.
    pub(crate) fn from_counts(counts: [u8; 9]) -> Self {
        let entries = MarbleId::all()
            .zip(counts)
            .filter(|&(_, amount)| amount > 0)
            .collect();
        Self { entries }
    }

    /// How far `marble` fell, 0 if it did not move.
    #[must_use]
    pub fn get(&self, marble: MarbleId) -> u8 {
        self.entries
            .iter()
            .find(|(m, _)| *m == marble)
            .map_or(0, |&(_, amount)| amount)
    }

    /// Iterate over (marble, amount) pairs in marble order.
    pub fn iter(&self) -> impl Iterator<Item = (MarbleId, u8)> + '_ {
        self.entries.iter().copied()
    }

    /// Marbles that moved.
    pub fn marbles(&self) -> impl Iterator<Item = MarbleId> + '_ {
        self.entries.iter().map(|&(m, _)| m)
    }

    /// Number of marbles that moved.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all increments.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|&(_, a)| u32::from(a)).sum()
    }
}

/// One `shift` as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Layer of the shifted gate.
    pub layer: LayerId,

    /// The shifted gate.
    pub gate: GateId,

    /// Every marble the move made fall, and by how many layers.
    pub drops: Drops,

    /// The move also handed the turn to the opponent (made via `play`).
    pub turn_passed: bool,
}

impl MoveRecord {
    #[must_use]
    pub fn new(layer: LayerId, gate: GateId, drops: Drops, turn_passed: bool) -> Self {
        Self {
            layer,
            gate,
            drops,
            turn_passed,
        }
    }
}
