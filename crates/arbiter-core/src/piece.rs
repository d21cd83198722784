//! Pieces, square occupants, and route validation against occupancy.

use serde::Serialize;

use crate::{Color, Movement, Position, Role, Route};

/// A role paired with the side that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(role: Role, color: Color) -> Self {
        Piece { role, color }
    }

    /// See [`Role::direct_route`].
    #[inline]
    pub fn find_route(self, source: Position, destination: Position) -> Option<Route> {
        self.role.direct_route(self.color, source, destination)
    }

    /// Checks whether this piece may travel `route` given what sits on it.
    ///
    /// `occupants` must line up one-to-one with the route's squares.
    pub fn is_passable(self, route: &Route, occupants: &[Occupant]) -> bool {
        debug_assert_eq!(route.len(), occupants.len());
        let Some((destination, before)) = occupants.split_last() else {
            return false;
        };
        let path_clear = before.iter().all(|o| !o.is_occupied());

        match self.role {
            Role::Pawn if route.direction().is_diagonal() => destination.is_opponent_of(self.color),
            Role::Pawn => path_clear && !destination.is_occupied(),
            role => match role.shift_pattern(self.color).movement {
                Movement::Sliding => path_clear && self.can_land_on(*destination),
                Movement::Stepping => self.can_land_on(*destination),
            },
        }
    }

    #[inline]
    fn can_land_on(self, occupant: Occupant) -> bool {
        !occupant.is_occupied() || occupant.is_opponent_of(self.color)
    }

    /// Returns the placement character, uppercase for White.
    #[inline]
    pub const fn to_placement_char(self) -> char {
        self.role.to_placement_char(self.color)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// What sits on a square: nothing, or a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Occupant {
    #[default]
    Empty,
    Piece(Piece),
}

impl Occupant {
    #[inline]
    pub const fn piece(role: Role, color: Color) -> Self {
        Occupant::Piece(Piece::new(role, color))
    }

    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Occupant::Piece(_))
    }

    /// Returns true if a piece of `color` stands here. Always false when empty.
    #[inline]
    pub fn has_same_color(self, color: Color) -> bool {
        matches!(self, Occupant::Piece(p) if p.color == color)
    }

    /// Returns true if a piece of the other side stands here.
    #[inline]
    pub fn is_opponent_of(self, color: Color) -> bool {
        matches!(self, Occupant::Piece(p) if p.color == color.opposite() && p.color != color)
    }

    #[inline]
    pub fn is_king(self) -> bool {
        matches!(self, Occupant::Piece(p) if p.role == Role::King)
    }

    #[inline]
    pub const fn as_piece(self) -> Option<Piece> {
        match self {
            Occupant::Piece(p) => Some(p),
            Occupant::Empty => None,
        }
    }

    /// Returns the route this occupant would take, `None` for an empty square.
    pub fn find_route(self, source: Position, destination: Position) -> Option<Route> {
        self.as_piece()?.find_route(source, destination)
    }
}

impl From<Piece> for Occupant {
    fn from(piece: Piece) -> Self {
        Occupant::Piece(piece)
    }
}
