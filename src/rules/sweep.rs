//! Drop engine.
//!
//! A marble falls through a gate when it rests on that gate's layer, lies in
//! the gate's track, and sits in one of the gate's open slots. Falling moves
//! it down exactly one layer.
//!
//! A full [`sweep`] visits layers top to bottom. Because a marble only ever
//! moves down, one that falls out of layer `L` during the sweep is checked
//! again when layer `L + 1` is visited, so a single pass settles the whole
//! cascade.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Board, GateId, LayerId, MarbleId};
use crate::geometry::{droppable, track};

use super::history::Drops;

/// Marbles in `gate`'s track that rest exactly on `layer`.
#[must_use]
pub fn relevant(board: &Board, layer: LayerId, gate: GateId) -> SmallVec<[MarbleId; 3]> {
    let info = board.layer(layer);
    track(info.orientation, gate, info.gate(gate).extension)
        .into_iter()
        .filter(|&m| board.marble(m).depth.rests_on(layer))
        .collect()
}

/// Let every eligible marble fall through one gate.
///
/// Returns the marbles that fell.
pub fn drop_through_gate(board: &mut Board, layer: LayerId, gate: GateId) -> SmallVec<[MarbleId; 3]> {
    let resting = relevant(board, layer, gate);
    let falling: SmallVec<[MarbleId; 3]> = droppable(board.layer(layer), gate)
        .into_iter()
        .filter(|m| resting.contains(m))
        .collect();

    for &marble in &falling {
        let info = board.marble_mut(marble);
        if let Some(next) = info.depth.dropped() {
            trace!(%marble, %layer, %gate, depth = next.raw(), "marble falls");
            info.depth = next;
        }
    }

    falling
}

/// Run the gates of one layer in the given order.
///
/// Gate tracks are disjoint, so every order gives the same result;
/// [`drop_in_layer`] uses ascending gate order.
pub fn drop_in_layer_ordered(
    board: &mut Board,
    layer: LayerId,
    order: impl IntoIterator<Item = GateId>,
) -> SmallVec<[MarbleId; 9]> {
    let mut dropped = SmallVec::new();
    for gate in order {
        dropped.extend(drop_through_gate(board, layer, gate));
    }
    dropped
}

/// Let every eligible marble on `layer` fall one layer.
pub fn drop_in_layer(board: &mut Board, layer: LayerId) -> SmallVec<[MarbleId; 9]> {
    drop_in_layer_ordered(board, layer, GateId::all())
}

/// Settle the whole board, top layer first.
///
/// Returns how far each marble fell during this sweep.
pub fn sweep(board: &mut Board) -> Drops {
    let mut counts = [0u8; 9];

    for layer in LayerId::all() {
        for marble in drop_in_layer(board, layer) {
            counts[marble.index()] += 1;
        }
    }

    let drops = Drops::from_counts(counts);
    debug!(moved = drops.len(), total = drops.total(), "sweep settled");
    drops
}
