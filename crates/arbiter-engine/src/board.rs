//! Board representation.

use std::collections::BTreeMap;

use arbiter_core::{Color, Occupant, Piece, Position, Role, Route};
use thiserror::Error;

/// A board state that should be impossible during normal play.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("no {0} king on the board")]
    MissingKing(Color),
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// One occupant per square, indexed by [`Position::index`].
///
/// Boards are small `Copy` values. A move never edits a board in place;
/// [`Board::with_move`] hands back a new one, so a rejected candidate is
/// simply dropped.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Occupant; 64],
}

impl Board {
    /// Creates a board with every square empty.
    pub const fn empty() -> Self {
        Board {
            squares: [Occupant::Empty; 64],
        }
    }

    /// Creates the standard starting layout.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (position, occupant) in Position::all().map(|p| (p, Self::initial_occupant(p))) {
            board.squares[position.index()] = occupant;
        }
        board
    }

    fn initial_occupant(position: Position) -> Occupant {
        let back_rank_role = BACK_RANK[position.file() as usize - 1];
        match position.rank() {
            1 => Occupant::piece(back_rank_role, Color::White),
            2 => Occupant::piece(Role::Pawn, Color::White),
            7 => Occupant::piece(Role::Pawn, Color::Black),
            8 => Occupant::piece(back_rank_role, Color::Black),
            _ => Occupant::Empty,
        }
    }

    /// Places an occupant while a board is being built from a layout.
    pub(crate) fn place(&mut self, position: Position, occupant: Occupant) {
        self.squares[position.index()] = occupant;
    }

    /// Returns what sits on `position`.
    #[inline]
    pub fn get(&self, position: Position) -> Occupant {
        self.squares[position.index()]
    }

    /// Returns the occupants along `route`, in route order.
    pub fn occupants_along(&self, route: &Route) -> Vec<Occupant> {
        route.positions().iter().map(|&p| self.get(p)).collect()
    }

    /// Returns a copy of this board with the piece on `source` moved to
    /// `destination`, capturing whatever stood there.
    #[must_use]
    pub fn with_move(&self, source: Position, destination: Position) -> Board {
        let mut next = *self;
        next.squares[destination.index()] = self.get(source);
        next.squares[source.index()] = Occupant::Empty;
        next
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |p| self.get(p).as_piece().map(|piece| (p, piece)))
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Finds the king of `color`.
    pub fn king_position(&self, color: Color) -> Result<Position, InvariantViolation> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.role == Role::King)
            .map(|(position, _)| position)
            .ok_or(InvariantViolation::MissingKing(color))
    }

    /// Returns a read-only square-by-square copy, for display layers.
    pub fn snapshot(&self) -> BTreeMap<Position, Occupant> {
        Position::all().map(|p| (p, self.get(p))).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", crate::placement::encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    #[test]
    fn initial_layout() {
        let board = Board::initial();
        assert_eq!(board.get(pos("e1")), Occupant::piece(Role::King, Color::White));
        assert_eq!(board.get(pos("d8")), Occupant::piece(Role::Queen, Color::Black));
        assert_eq!(board.get(pos("g2")), Occupant::piece(Role::Pawn, Color::White));
        assert_eq!(board.get(pos("e4")), Occupant::Empty);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::Black).count(), 16);
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::initial();
        let moved = board.with_move(pos("e2"), pos("e4"));
        assert_eq!(moved.get(pos("e2")), Occupant::Empty);
        assert_eq!(moved.get(pos("e4")), Occupant::piece(Role::Pawn, Color::White));
        assert_eq!(board.get(pos("e2")), Occupant::piece(Role::Pawn, Color::White));
        assert_ne!(board, moved);
    }

    #[test]
    fn with_move_captures() {
        let board = Board::initial().with_move(pos("d1"), pos("d7"));
        assert_eq!(board.get(pos("d7")), Occupant::piece(Role::Queen, Color::White));
        assert_eq!(board.pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn king_lookup() {
        let board = Board::initial();
        assert_eq!(board.king_position(Color::White), Ok(pos("e1")));
        assert_eq!(board.king_position(Color::Black), Ok(pos("e8")));
        assert_eq!(
            Board::empty().king_position(Color::White),
            Err(InvariantViolation::MissingKing(Color::White))
        );
    }

    #[test]
    fn occupants_along_route() {
        let board = Board::initial();
        let route = Route::walk(pos("a1"), arbiter_core::Direction::N, usize::MAX);
        let occupants = board.occupants_along(&route);
        assert_eq!(occupants.len(), 7);
        assert_eq!(occupants[0], Occupant::piece(Role::Pawn, Color::White));
        assert_eq!(occupants[6], Occupant::piece(Role::Rook, Color::Black));
    }

    #[test]
    fn snapshot_covers_every_square() {
        let snapshot = Board::initial().snapshot();
        assert_eq!(snapshot.len(), 64);
        assert_eq!(snapshot[&pos("a8")], Occupant::piece(Role::Rook, Color::Black));
    }
}
