//! Attack scanning: which pieces can reach a square on a given board.

use arbiter_core::{Color, Position, Route};

use crate::{Board, InvariantViolation};

/// Returns the route the piece on `source` would take to `target`, provided
/// the route exists geometrically and is not blocked.
pub fn reachable_route(board: &Board, source: Position, target: Position) -> Option<Route> {
    let piece = board.get(source).as_piece()?;
    let route = piece.find_route(source, target)?;
    piece
        .is_passable(&route, &board.occupants_along(&route))
        .then_some(route)
}

/// Returns every piece of `attacker` that can reach `target`, with its route.
pub fn attackers_of(board: &Board, attacker: Color, target: Position) -> Vec<(Position, Route)> {
    board
        .pieces_of(attacker)
        .filter_map(|(source, _)| reachable_route(board, source, target).map(|route| (source, route)))
        .collect()
}

/// Returns true if any piece of `attacker` can reach `target`.
pub fn is_attacked_by(board: &Board, attacker: Color, target: Position) -> bool {
    board
        .pieces_of(attacker)
        .any(|(source, _)| reachable_route(board, source, target).is_some())
}

/// Returns true if `attacker` has a piece bearing on the other side's king.
pub fn is_checked_by(board: &Board, attacker: Color) -> Result<bool, InvariantViolation> {
    let king = board.king_position(attacker.opposite())?;
    Ok(is_attacked_by(board, attacker, king))
}

/// Returns the routes along which `attacker` gives check, each reversed to
/// run from the king back to the attacking piece.
///
/// The squares of these routes are exactly where the defender can block or
/// capture.
pub fn attack_routes(board: &Board, attacker: Color) -> Result<Vec<Route>, InvariantViolation> {
    let king = board.king_position(attacker.opposite())?;
    Ok(attackers_of(board, attacker, king)
        .into_iter()
        .map(|(source, route)| route.reversed_toward(source))
        .collect())
}
