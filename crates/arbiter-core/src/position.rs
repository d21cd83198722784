//! Board coordinates.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::Direction;

/// Errors that can occur when building a [`Position`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("position out of range: file {file}, rank {rank} (both must be 1-8)")]
    OutOfRange { file: u8, rank: u8 },

    #[error("invalid algebraic square: '{0}'")]
    InvalidAlgebraic(String),
}

/// A square on the board, as a (file, rank) pair with both in 1-8.
///
/// File 1 is the a-file and rank 1 is White's back rank. Positions order by
/// rank first, then file, so sorting walks a1, b1, ..., h1, a2, ..., h8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Lowest valid file or rank.
    pub const MIN: u8 = 1;
    /// Highest valid file or rank.
    pub const MAX: u8 = 8;

    /// Creates a position, failing if either coordinate is outside 1-8.
    pub const fn new(file: u8, rank: u8) -> Result<Self, PositionError> {
        if Self::in_range(file as i16) && Self::in_range(rank as i16) {
            Ok(Position { rank, file })
        } else {
            Err(PositionError::OutOfRange { file, rank })
        }
    }

    /// Parses a position from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, PositionError> {
        let invalid = || PositionError::InvalidAlgebraic(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a' + 1,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => c - b'0',
            _ => return Err(invalid()),
        };
        Position::new(file, rank).map_err(|_| invalid())
    }

    /// Returns the file (1-8).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the rank (1-8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns true if one step in `direction` stays on the board.
    #[inline]
    pub const fn is_available(self, direction: Direction) -> bool {
        let (df, dr) = direction.delta();
        Self::in_range(self.file as i16 + df as i16) && Self::in_range(self.rank as i16 + dr as i16)
    }

    /// Returns the square one step away in `direction`, if it is on the board.
    #[inline]
    pub const fn next(self, direction: Direction) -> Option<Self> {
        if !self.is_available(direction) {
            return None;
        }
        let (df, dr) = direction.delta();
        Some(Position {
            rank: (self.rank as i16 + dr as i16) as u8,
            file: (self.file as i16 + df as i16) as u8,
        })
    }

    /// Iterates over all 64 squares, a1 through h8, rank by rank.
    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX)
            .flat_map(|rank| (Self::MIN..=Self::MAX).map(move |file| Position { rank, file }))
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file - 1) as char, self.rank)
    }

    /// Returns a 0-63 index, a1 = 0 and h8 = 63.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    #[inline]
    const fn in_range(value: i16) -> bool {
        value >= Self::MIN as i16 && value <= Self::MAX as i16
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
