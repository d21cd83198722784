//! Material scoring.

use arbiter_core::{Color, Role};
use serde::Serialize;

use crate::Board;

/// Material totals for both sides and the side that is ahead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub white: f64,
    pub black: f64,
    pub winner: Color,
}

impl Score {
    /// Scores `board`.
    pub fn of(board: &Board) -> Self {
        let white = material(board, Color::White);
        let black = material(board, Color::Black);
        Score {
            white,
            black,
            winner: compare(white, black),
        }
    }
}

/// Sums the material of `color`.
///
/// Pawns that share a file with another pawn of the same color count half.
pub fn material(board: &Board, color: Color) -> f64 {
    let mut pawns_per_file = [0u8; 8];
    for (position, piece) in board.pieces_of(color) {
        if piece.role == Role::Pawn {
            pawns_per_file[position.file() as usize - 1] += 1;
        }
    }

    board
        .pieces_of(color)
        .map(|(position, piece)| match piece.role {
            Role::Pawn if pawns_per_file[position.file() as usize - 1] > 1 => piece.role.value() / 2.0,
            role => role.value(),
        })
        .sum()
}

/// Returns the side with strictly more material, `Neutral` on a tie.
pub fn winner(board: &Board) -> Color {
    compare(material(board, Color::White), material(board, Color::Black))
}

fn compare(white: f64, black: f64) -> Color {
    if white > black {
        Color::White
    } else if black > white {
        Color::Black
    } else {
        Color::Neutral
    }
}
