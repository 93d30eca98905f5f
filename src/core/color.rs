//! Player colors.
//!
//! The game is played by exactly two players, silver and gold. Colors own
//! gates and marbles and decide whose turn it is.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two player colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Silver,
    Gold,
}

impl Color {
    /// Both colors, silver first.
    pub const ALL: [Color; 2] = [Color::Silver, Color::Gold];

    /// The other player's color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Silver => Color::Gold,
            Color::Gold => Color::Silver,
        }
    }

    /// Index into per-color storage (silver = 0, gold = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Silver => 0,
            Color::Gold => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Silver => write!(f, "silver"),
            Color::Gold => write!(f, "gold"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ```
/// use marble_drop::core::{Color, ColorMap};
///
/// let mut score: ColorMap<u32> = ColorMap::new(|_| 0);
/// score[Color::Gold] += 2;
/// assert_eq!(score[Color::Silver], 0);
/// assert_eq!(score[Color::Gold], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Silver), factory(Color::Gold)],
        }
    }

    /// Iterate over (color, value) pairs, silver first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }
}
