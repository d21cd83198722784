//! Player color representation.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// The two sides of a game, plus `Neutral` for "no winner".
///
/// `Neutral` never occupies a square; it only shows up as the result of a
/// tied score comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Neutral,
}

impl Color {
    /// Returns the opposite color. `Neutral` stays `Neutral`.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Neutral => Color::Neutral,
        }
    }

    /// Returns the direction pawns of this color advance in.
    #[inline]
    pub const fn forward(self) -> Option<Direction> {
        match self {
            Color::White => Some(Direction::N),
            Color::Black => Some(Direction::S),
            Color::Neutral => None,
        }
    }

    /// Returns the rank (1-8) pawns of this color start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> Option<u8> {
        match self {
            Color::White => Some(2),
            Color::Black => Some(7),
            Color::Neutral => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::Neutral => write!(f, "Neutral"),
        }
    }
}
