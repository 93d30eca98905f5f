//! Per-color gate inventories.
//!
//! Each color starts with six sliders: one furthest, one mid, two near and
//! two solid. Twelve sliders fill the twelve gate positions exactly.

use rustc_hash::FxHashMap;

use crate::core::{BuildError, Color, ColorMap, GateType};

/// Starting count of each gate type, per color.
pub const STARTING_STOCK: [(GateType, u8); 4] = [
    (GateType::Furthest, 1),
    (GateType::Mid, 1),
    (GateType::Near, 2),
    (GateType::Solid, 2),
];

/// Remaining gate types for both colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    stock: ColorMap<FxHashMap<GateType, u8>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            stock: ColorMap::new(|_| STARTING_STOCK.into_iter().collect()),
        }
    }
}

impl Inventory {
    /// Create a full inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many gates of `gate_type` `color` may still place.
    #[must_use]
    pub fn remaining(&self, color: Color, gate_type: GateType) -> u8 {
        self.stock[color].get(&gate_type).copied().unwrap_or(0)
    }

    /// Gate types `color` still has, in offset order.
    #[must_use]
    pub fn available(&self, color: Color) -> Vec<GateType> {
        GateType::ALL
            .into_iter()
            .filter(|&t| self.remaining(color, t) > 0)
            .collect()
    }

    /// Total gates `color` still has.
    #[must_use]
    pub fn total(&self, color: Color) -> usize {
        self.stock[color].values().map(|&n| usize::from(n)).sum()
    }

    /// Take one gate out of stock.
    pub fn take(&mut self, color: Color, gate_type: GateType) -> Result<(), BuildError> {
        match self.stock[color].get_mut(&gate_type) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(BuildError::InventoryExhausted { color, gate_type }),
        }
    }

    /// Put one gate back into stock.
    pub fn restore(&mut self, color: Color, gate_type: GateType) {
        *self.stock[color].entry(gate_type).or_insert(0) += 1;
    }
}
