//! Range-checked identifiers for layers, gates and marbles.
//!
//! The board has a fixed shape: 4 layers, 3 gates per layer and 9 marbles
//! laid out as a 3x3 grid. Each identifier is a newtype over `u8` whose
//! constructor rejects out-of-range values, so code holding a `LayerId`
//! can index the board without further checks.
//!
//! ## Usage
//!
//! ```
//! use marble_drop::core::{GateId, LayerId, MarbleId};
//!
//! let layer = LayerId::new(2).unwrap();
//! assert_eq!(layer.index(), 2);
//! assert!(LayerId::new(4).is_err());
//!
//! assert_eq!(GateId::all().count(), 3);
//!
//! // Centred grid coordinates: (0, 0) is the middle marble
//! let centre = MarbleId::from_grid(0, 0).unwrap();
//! assert_eq!(centre.index(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::RulesError;

macro_rules! bounded_id {
    ($(#[$meta:meta])* $name:ident, $count:expr, $err:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub struct $name(u8);

        impl $name {
            /// Number of distinct values.
            pub const COUNT: usize = $count;

            /// Create an identifier, rejecting values outside the board.
            pub fn new(raw: u8) -> Result<Self, RulesError> {
                if (raw as usize) < Self::COUNT {
                    Ok(Self(raw))
                } else {
                    Err(RulesError::$err(raw))
                }
            }

            /// Get the raw value.
            #[must_use]
            pub const fn raw(self) -> u8 {
                self.0
            }

            /// Get the value as an array index.
            #[must_use]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            /// Iterate over every identifier in ascending order.
            pub fn all() -> impl Iterator<Item = Self> + Clone {
                (0..Self::COUNT as u8).map(Self)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = RulesError;

            fn try_from(raw: u8) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for u8 {
            fn from(id: $name) -> u8 {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

bounded_id!(
    /// One of the four stacked layers. Layer 0 is the top of the board.
    LayerId,
    4,
    InvalidLayer,
    "Layer"
);

bounded_id!(
    /// One of the three parallel gates within a layer.
    GateId,
    3,
    InvalidGate,
    "Gate"
);

bounded_id!(
    /// One of the nine marble positions.
    ///
    /// Marbles form a 3x3 grid stored row-major:
    /// `index = column + 1 + 3 * (row + 1)` with row and column in `-1..=1`.
    MarbleId,
    9,
    InvalidMarble,
    "Marble"
);

impl MarbleId {
    /// Wrap a value already known to be in range.
    pub(crate) const fn new_unchecked(raw: u8) -> Self {
        debug_assert!((raw as usize) < Self::COUNT);
        Self(raw)
    }

    /// Build a marble id from centred grid coordinates.
    ///
    /// `row` and `column` must both lie in `-1..=1`.
    pub fn from_grid(row: i8, column: i8) -> Result<Self, RulesError> {
        if !(-1..=1).contains(&row) || !(-1..=1).contains(&column) {
            return Err(RulesError::InvalidGridPosition { row, column });
        }
        Self::new((column + 1 + 3 * (row + 1)) as u8)
    }

    /// Grid row in `-1..=1`.
    #[must_use]
    pub const fn row(self) -> i8 {
        (self.0 / 3) as i8 - 1
    }

    /// Grid column in `-1..=1`.
    #[must_use]
    pub const fn column(self) -> i8 {
        (self.0 % 3) as i8 - 1
    }
}
