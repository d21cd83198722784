//! Move validation.
//!
//! [`try_move`] is the single legality check the engine uses: piece
//! ownership, geometry, occupancy along the route, and finally a scan of the
//! resulting board for an attack on the mover's own king. That last step
//! covers pins, discovered checks and walking into check without any
//! dedicated pin detection.

pub mod attacks;

use arbiter_core::{Color, Piece, Position, Role, Route};
use thiserror::Error;

use crate::{Board, InvariantViolation};

/// Why a move was refused. The board is never changed by a refused move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("no piece on {0}")]
    EmptySquare(Position),

    #[error("the piece on {position} belongs to {owner}, but it is {turn}'s turn")]
    NotYourPiece {
        position: Position,
        owner: Color,
        turn: Color,
    },

    #[error("{piece} cannot move from {from} to {to}")]
    NoRoute {
        piece: Piece,
        from: Position,
        to: Position,
    },

    #[error("the route from {from} to {to} is blocked")]
    Blocked { from: Position, to: Position },

    #[error("moving from {from} to {to} leaves the {color} king in check")]
    SelfCheck {
        color: Color,
        from: Position,
        to: Position,
    },
}

/// Failure of [`try_move`]: either the move is illegal, or the board itself
/// is broken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Validates a move by `color` and returns the board it produces.
///
/// The returned board is a fresh value; `board` is left as it was whether
/// the move is accepted or not.
pub fn try_move(
    board: &Board,
    color: Color,
    source: Position,
    destination: Position,
) -> Result<Board, RuleError> {
    let piece = board
        .get(source)
        .as_piece()
        .ok_or(IllegalMove::EmptySquare(source))?;
    if piece.color != color {
        return Err(IllegalMove::NotYourPiece {
            position: source,
            owner: piece.color,
            turn: color,
        }
        .into());
    }

    let route = piece
        .find_route(source, destination)
        .ok_or(IllegalMove::NoRoute {
            piece,
            from: source,
            to: destination,
        })?;
    if !piece.is_passable(&route, &board.occupants_along(&route)) {
        return Err(IllegalMove::Blocked {
            from: source,
            to: destination,
        }
        .into());
    }

    let candidate = board.with_move(source, destination);
    if attacks::is_checked_by(&candidate, color.opposite())? {
        return Err(IllegalMove::SelfCheck {
            color,
            from: source,
            to: destination,
        }
        .into());
    }

    Ok(candidate)
}

/// Returns true if `try_move` would accept the move. Invariant violations
/// count as "no".
pub fn is_legal(board: &Board, color: Color, source: Position, destination: Position) -> bool {
    try_move(board, color, source, destination).is_ok()
}

/// Lists every legal (source, destination) pair for `color`.
pub fn legal_moves(board: &Board, color: Color) -> Vec<(Position, Position)> {
    board
        .pieces_of(color)
        .flat_map(|(source, piece)| {
            piece
                .role
                .candidate_routes(piece.color, source)
                .into_iter()
                .flat_map(|route| route.positions().to_vec())
                .map(move |destination| (source, destination))
        })
        .filter(|&(source, destination)| is_legal(board, color, source, destination))
        .collect()
}

/// Returns true if `color`, currently in check along `attack_routes`, has
/// any move that gets out of it.
///
/// The king may step to any adjacent square that survives the self-check
/// test. Any other piece may move onto a square of an attack route, which
/// either blocks the line or captures the attacker.
pub fn can_escape(board: &Board, color: Color, attack_routes: &[Route]) -> Result<bool, InvariantViolation> {
    let king = board.king_position(color)?;

    let king_escapes = Role::King
        .candidate_routes(color, king)
        .iter()
        .filter_map(Route::destination)
        .any(|destination| is_legal(board, color, king, destination));
    if king_escapes {
        tracing::debug!(%color, %king, "king can step out of check");
        return Ok(true);
    }

    let interposes = board
        .pieces_of(color)
        .filter(|(_, piece)| piece.role != Role::King)
        .any(|(source, _)| {
            attack_routes
                .iter()
                .flat_map(Route::positions)
                .any(|&target| is_legal(board, color, source, target))
        });
    if interposes {
        tracing::debug!(%color, "check can be blocked or the attacker captured");
    }
    Ok(interposes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::decode;
    use arbiter_core::Occupant;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn illegal(result: Result<Board, RuleError>) -> IllegalMove {
        match result {
            Err(RuleError::Illegal(reason)) => reason,
            other => panic!("expected an illegal move, got {:?}", other),
        }
    }

    #[test]
    fn opening_pawn_moves() {
        let board = Board::initial();
        let next = try_move(&board, Color::White, pos("e2"), pos("e4")).unwrap();
        assert_eq!(next.get(pos("e4")), Occupant::piece(Role::Pawn, Color::White));
        assert!(try_move(&board, Color::White, pos("e2"), pos("e3")).is_ok());
    }

    #[test]
    fn empty_source() {
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("e4"), pos("e5")));
        assert_eq!(reason, IllegalMove::EmptySquare(pos("e4")));
    }

    #[test]
    fn wrong_color() {
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("e7"), pos("e5")));
        assert!(matches!(reason, IllegalMove::NotYourPiece { owner: Color::Black, .. }));
    }

    #[test]
    fn no_geometric_route() {
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("e2"), pos("e5")));
        assert!(matches!(reason, IllegalMove::NoRoute { .. }));
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("b1"), pos("b3")));
        assert!(matches!(reason, IllegalMove::NoRoute { .. }));
    }

    #[test]
    fn blocked_route() {
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("a1"), pos("a3")));
        assert!(matches!(reason, IllegalMove::Blocked { .. }));
        let reason = illegal(try_move(&Board::initial(), Color::White, pos("d1"), pos("d2")));
        assert!(matches!(reason, IllegalMove::Blocked { .. }));
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // White bishop on e2 is pinned against e1 by the black rook on e8.
        let board = decode("4r1k1/8/8/8/8/8/4B3/4K3");
        let reason = illegal(try_move(&board, Color::White, pos("e2"), pos("d3")));
        assert!(matches!(reason, IllegalMove::SelfCheck { color: Color::White, .. }));
    }

    #[test]
    fn capture_that_exposes_king_is_rejected() {
        // The knight could take the black queen on d4, but that uncovers the rook on e8.
        let board = decode("4r1k1/8/8/8/3q4/8/4N3/4K3");
        let reason = illegal(try_move(&board, Color::White, pos("e2"), pos("d4")));
        assert!(matches!(reason, IllegalMove::SelfCheck { .. }));
    }

    #[test]
    fn king_cannot_walk_into_check() {
        let board = decode("6k1/8/8/8/8/8/r7/4K3");
        let reason = illegal(try_move(&board, Color::White, pos("e1"), pos("e2")));
        assert!(matches!(reason, IllegalMove::SelfCheck { .. }));
        assert!(try_move(&board, Color::White, pos("e1"), pos("f1")).is_ok());
    }

    #[test]
    fn missing_king_aborts() {
        let board = decode("8/8/8/8/8/8/4P3/8");
        assert_eq!(
            try_move(&board, Color::White, pos("e2"), pos("e3")),
            Err(RuleError::Invariant(InvariantViolation::MissingKing(Color::White)))
        );
    }

    #[test]
    fn twenty_opening_moves() {
        assert_eq!(legal_moves(&Board::initial(), Color::White).len(), 20);
        assert_eq!(legal_moves(&Board::initial(), Color::Black).len(), 20);
    }

    #[test]
    fn escape_by_king_step() {
        let board = decode("4k3/8/8/8/8/8/8/R3K3").with_move(pos("a1"), pos("a8"));
        let routes = attacks::attack_routes(&board, Color::White).unwrap();
        assert_eq!(can_escape(&board, Color::Black, &routes), Ok(true));
    }

    #[test]
    fn escape_by_block() {
        // Back-rank check; the king is boxed in but the bishop can interpose on f8.
        let board = decode("R5k1/5ppp/8/8/1b6/8/8/6K1");
        let routes = attacks::attack_routes(&board, Color::White).unwrap();
        assert!(!is_legal(&board, Color::Black, pos("g8"), pos("h8")));
        assert_eq!(can_escape(&board, Color::Black, &routes), Ok(true));
    }

    #[test]
    fn escape_by_capture() {
        // Back-rank check; the rook on a2 can take the checking rook.
        let board = decode("R5k1/5ppp/8/8/8/8/r7/6K1");
        let routes = attacks::attack_routes(&board, Color::White).unwrap();
        assert_eq!(can_escape(&board, Color::Black, &routes), Ok(true));
    }

    #[test]
    fn back_rank_mate_has_no_escape() {
        let board = decode("R5k1/5ppp/8/8/8/8/8/6K1");
        let routes = attacks::attack_routes(&board, Color::White).unwrap();
        assert_eq!(can_escape(&board, Color::Black, &routes), Ok(false));
    }
}
