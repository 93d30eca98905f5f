//! Track geometry: which marbles a gate controls and which it lets through.
//!
//! Each layer splits the 3x3 marble grid into three parallel tracks, one per
//! gate. A horizontal layer's gate `g` covers grid row `g`, a vertical
//! layer's gate `g` covers grid column `g`.
//!
//! ## Slots
//!
//! The three marbles of a track are addressed by slot `0..3`. Slot order runs
//! away from the end the gate extends from: for a top-left gate the track is
//! read in grid order, otherwise it is reversed.
//!
//! ## Open slots
//!
//! For a gate at depth `d` with type offset `t`, the raw opening set is
//! `{d + t} ∪ {0, .., d-1}`. Raw index `v` opens slot `2 - v`; values that land
//! outside `0..3` open nothing.
//!
//! ```
//! use marble_drop::core::{GateDepth, GateType};
//! use marble_drop::geometry::open_slots;
//!
//! // Closed furthest-type gate opens only the far slot
//! assert_eq!(open_slots(GateDepth::ZERO, GateType::Furthest).as_slice(), &[2]);
//!
//! // A solid gate opens nothing until it is shifted
//! assert!(open_slots(GateDepth::ZERO, GateType::Solid).is_empty());
//! ```
//!
//! All functions here are pure.

use smallvec::SmallVec;

use crate::core::{Extension, GateDepth, GateId, GateType, LayerInfo, MarbleId, Orientation};

/// The three marbles of one track, in slot order.
pub type Track = [MarbleId; 3];

/// Marbles covered by `gate` in a layer of the given orientation, in slot order.
#[must_use]
pub fn track(orientation: Orientation, gate: GateId, extension: Extension) -> Track {
    let g = gate.raw();
    let base = match orientation {
        Orientation::Horizontal => [3 * g, 3 * g + 1, 3 * g + 2],
        Orientation::Vertical => [g, g + 3, g + 6],
    };
    let mut slots = base.map(MarbleId::new_unchecked);
    if !extension.is_top_left() {
        slots.reverse();
    }
    slots
}

/// Open slot positions for a gate, ascending and without duplicates.
#[must_use]
pub fn open_slots(depth: GateDepth, gate_type: GateType) -> SmallVec<[usize; 3]> {
    let d = i16::from(depth.raw());
    let t = i16::from(gate_type.offset());

    let mut slots: SmallVec<[i16; 4]> = std::iter::once(d + t)
        .chain(0..d)
        .map(|v| 2 - v)
        .collect();
    slots.sort_unstable();
    slots.dedup();

    slots
        .into_iter()
        .filter(|s| (0..3).contains(s))
        .map(|s| s as usize)
        .collect()
}

/// Marbles that may pass `gate` of `layer` in its current configuration.
///
/// Whether they actually fall also depends on them resting on this layer;
/// see [`crate::rules::sweep`].
#[must_use]
pub fn droppable(layer: &LayerInfo, gate: GateId) -> SmallVec<[MarbleId; 3]> {
    let info = layer.gate(gate);
    let slots = track(layer.orientation, gate, info.extension);

    open_slots(info.depth, info.gate_type)
        .into_iter()
        .map(|s| slots[s])
        .collect()
}
