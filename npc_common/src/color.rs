//! The three vertex colors and complete colorings built from them.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One of exactly three vertex colors.
///
/// The set is closed on purpose: 3-colorability is a fixed-k question and the
/// reduction's correctness argument depends on there being exactly three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    /// Tried first.
    Green,
    /// Tried second.
    Blue,
    /// Tried last.
    Red,
}

impl Color {
    /// The order in which the coloring search tries colors at every vertex.
    pub const TRIAL_ORDER: [Self; 3] = [Self::Green, Self::Blue, Self::Red];

    /// The two colors different from `self`.
    #[must_use]
    pub const fn others(self) -> [Self; 2] {
        match self {
            Self::Green => [Self::Blue, Self::Red],
            Self::Blue => [Self::Green, Self::Red],
            Self::Red => [Self::Green, Self::Blue],
        }
    }

    /// Single-letter label used in text reports.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A complete assignment of a color to every vertex of a graph.
///
/// Only the coloring search produces these, and only as a witness; partial
/// state during the search lives in the searcher.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexColoring {
    colors: Vec<Color>,
}

impl VertexColoring {
    /// Wrap one color per vertex, in vertex order.
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Color of vertex `v`, or `None` if `v` is out of range.
    #[must_use]
    pub fn get(&self, v: usize) -> Option<Color> {
        self.colors.get(v).copied()
    }

    /// Number of colored vertices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// True for the coloring of the empty graph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors in vertex order.
    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// Number of distinct colors actually used.
    #[must_use]
    pub fn distinct_colors(&self) -> usize {
        self.colors.iter().unique().count()
    }
}

impl std::ops::Index<usize> for VertexColoring {
    type Output = Color;

    fn index(&self, v: usize) -> &Color {
        &self.colors[v]
    }
}

impl fmt::Display for VertexColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.colors.iter().join(" "))
    }
}
