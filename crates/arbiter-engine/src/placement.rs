//! Piece-placement strings: the board field of FEN, without the turn,
//! castling, en passant or clock fields.

use arbiter_core::{Occupant, Piece, Position, Role};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Board;

/// The standard starting layout.
pub const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors reported by [`decode_strict`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{character}' in rank {rank}")]
    InvalidCharacter { character: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

/// How to treat malformed placement strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Unknown letters become empty squares; missing squares stay empty.
    #[default]
    Lenient,
    /// Any malformed input is an error.
    Strict,
}

/// Encodes a board as a placement string, rank 8 first.
pub fn encode(board: &Board) -> String {
    let mut placement = String::new();

    for rank in (Position::MIN..=Position::MAX).rev() {
        let mut empty_count = 0;
        for file in Position::MIN..=Position::MAX {
            let Ok(position) = Position::new(file, rank) else {
                continue;
            };
            match board.get(position) {
                Occupant::Piece(piece) => {
                    if empty_count > 0 {
                        placement.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    placement.push(piece.to_placement_char());
                }
                Occupant::Empty => empty_count += 1,
            }
        }
        if empty_count > 0 {
            placement.push_str(&empty_count.to_string());
        }
        if rank > Position::MIN {
            placement.push('/');
        }
    }

    placement
}

/// Decodes a placement string, tolerating malformed input.
///
/// Unrecognized letters decode to empty squares, ranks beyond the eighth and
/// squares past the h-file are ignored, and anything not covered stays empty.
pub fn decode(placement: &str) -> Board {
    let mut board = Board::empty();

    for (rank, row) in (Position::MIN..=Position::MAX).rev().zip(placement.split('/')) {
        let mut file = Position::MIN as u32;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip;
                continue;
            }
            let occupant = match Role::from_placement_char(c) {
                Some((role, color)) => Occupant::Piece(Piece::new(role, color)),
                None => {
                    tracing::warn!(character = %c, rank, "unrecognized placement character, treating as empty");
                    Occupant::Empty
                }
            };
            if let Some(position) = u8::try_from(file).ok().and_then(|f| Position::new(f, rank).ok()) {
                board.place(position, occupant);
            }
            file += 1;
        }
    }

    board
}

/// Decodes a placement string, rejecting anything malformed.
pub fn decode_strict(placement: &str) -> Result<Board, PlacementError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(PlacementError::InvalidRankCount(rows.len()));
    }

    let mut board = Board::empty();
    for (rank, row) in (Position::MIN..=Position::MAX).rev().zip(rows) {
        let mut squares = 0u32;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                squares += skip;
                continue;
            }
            let (role, color) = Role::from_placement_char(c)
                .ok_or(PlacementError::InvalidCharacter { character: c, rank })?;
            let position = u8::try_from(squares + 1)
                .ok()
                .and_then(|file| Position::new(file, rank).ok())
                .ok_or(PlacementError::InvalidRankLength {
                    rank,
                    squares: squares + 1,
                })?;
            board.place(position, Occupant::Piece(Piece::new(role, color)));
            squares += 1;
        }
        if squares != 8 {
            return Err(PlacementError::InvalidRankLength { rank, squares });
        }
    }

    Ok(board)
}

/// Decodes with the given [`DecodeMode`].
pub fn decode_with(placement: &str, mode: DecodeMode) -> Result<Board, PlacementError> {
    match mode {
        DecodeMode::Lenient => Ok(decode(placement)),
        DecodeMode::Strict => decode_strict(placement),
    }
}
