//! Board directions.

use serde::{Deserialize, Serialize};

/// A fixed (Δfile, Δrank) displacement.
///
/// The first eight variants are the compass directions used by kings, queens,
/// rooks, bishops and pawns. The remaining eight are knight jumps, named by
/// the two compass legs they combine (`NNE` is two north, one east).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
    NNE,
    NNW,
    SSE,
    SSW,
    EEN,
    EES,
    WWN,
    WWS,
}

impl Direction {
    /// North, south, east and west.
    pub const ORTHOGONAL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// The four diagonals.
    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

    /// All eight compass directions.
    pub const COMPASS: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// The eight knight jumps.
    pub const KNIGHT: [Direction; 8] = [
        Direction::NNE,
        Direction::NNW,
        Direction::SSE,
        Direction::SSW,
        Direction::EEN,
        Direction::EES,
        Direction::WWN,
        Direction::WWS,
    ];

    /// Returns the (Δfile, Δrank) pair.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::N => (0, 1),
            Direction::S => (0, -1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
            Direction::NE => (1, 1),
            Direction::NW => (-1, 1),
            Direction::SE => (1, -1),
            Direction::SW => (-1, -1),
            Direction::NNE => (1, 2),
            Direction::NNW => (-1, 2),
            Direction::SSE => (1, -2),
            Direction::SSW => (-1, -2),
            Direction::EEN => (2, 1),
            Direction::EES => (2, -1),
            Direction::WWN => (-2, 1),
            Direction::WWS => (-2, -1),
        }
    }

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
            Direction::NNE => Direction::SSW,
            Direction::NNW => Direction::SSE,
            Direction::SSE => Direction::NNW,
            Direction::SSW => Direction::NNE,
            Direction::EEN => Direction::WWS,
            Direction::EES => Direction::WWN,
            Direction::WWN => Direction::EES,
            Direction::WWS => Direction::EEN,
        }
    }

    /// Returns true for the four diagonal compass directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Direction::NE | Direction::NW | Direction::SE | Direction::SW)
    }
}
