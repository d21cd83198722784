//! Piece roles and their movement capability.

use serde::{Deserialize, Serialize};

use crate::{Color, Direction, Position, Route};

/// How far a role travels along each of its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// One square per direction (king, knight, pawn).
    Stepping,
    /// Repeats until the board edge (rook, bishop, queen).
    Sliding,
}

/// The directions a role may move in, together with its [`Movement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftPattern {
    pub directions: &'static [Direction],
    pub movement: Movement,
}

const WHITE_PAWN: [Direction; 3] = [Direction::N, Direction::NE, Direction::NW];
const BLACK_PAWN: [Direction; 3] = [Direction::S, Direction::SE, Direction::SW];

impl ShiftPattern {
    pub const KING: ShiftPattern = ShiftPattern::stepping(&Direction::COMPASS);
    pub const KNIGHT: ShiftPattern = ShiftPattern::stepping(&Direction::KNIGHT);
    pub const ROOK: ShiftPattern = ShiftPattern::sliding(&Direction::ORTHOGONAL);
    pub const BISHOP: ShiftPattern = ShiftPattern::sliding(&Direction::DIAGONAL);
    pub const QUEEN: ShiftPattern = ShiftPattern::sliding(&Direction::COMPASS);
    pub const NONE: ShiftPattern = ShiftPattern::stepping(&[]);

    const fn stepping(directions: &'static [Direction]) -> Self {
        ShiftPattern {
            directions,
            movement: Movement::Stepping,
        }
    }

    const fn sliding(directions: &'static [Direction]) -> Self {
        ShiftPattern {
            directions,
            movement: Movement::Sliding,
        }
    }

    /// Pawn pattern: forward first, then the two capturing diagonals.
    pub const fn pawn(color: Color) -> Self {
        match color {
            Color::White => ShiftPattern::stepping(&WHITE_PAWN),
            Color::Black => ShiftPattern::stepping(&BLACK_PAWN),
            Color::Neutral => ShiftPattern::NONE,
        }
    }
}

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// All roles in order.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// Returns the movement pattern of this role for the given color.
    pub const fn shift_pattern(self, color: Color) -> ShiftPattern {
        match self {
            Role::Pawn => ShiftPattern::pawn(color),
            Role::Knight => ShiftPattern::KNIGHT,
            Role::Bishop => ShiftPattern::BISHOP,
            Role::Rook => ShiftPattern::ROOK,
            Role::Queen => ShiftPattern::QUEEN,
            Role::King => ShiftPattern::KING,
        }
    }

    /// Returns true if this role slides until the board edge.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Role::Bishop | Role::Rook | Role::Queen)
    }

    /// Material value used for scoring.
    pub const fn value(self) -> f64 {
        match self {
            Role::Pawn => 1.0,
            Role::Knight | Role::Bishop => 3.0,
            Role::Rook => 5.0,
            Role::Queen => 9.0,
            Role::King => 0.0,
        }
    }

    /// Returns the route this role takes from `source` in `direction`,
    /// ignoring occupancy.
    fn route_in(self, color: Color, source: Position, direction: Direction) -> Route {
        let limit = match self.shift_pattern(color).movement {
            Movement::Sliding => usize::MAX,
            Movement::Stepping if self == Role::Pawn && Some(direction) == color.forward() => {
                if Some(source.rank()) == color.pawn_home_rank() {
                    2
                } else {
                    1
                }
            }
            Movement::Stepping => 1,
        };
        Route::walk(source, direction, limit)
    }

    /// Returns one route per allowed direction, ignoring occupancy.
    ///
    /// A route is empty when the first step in that direction leaves the board.
    pub fn candidate_routes(self, color: Color, source: Position) -> Vec<Route> {
        self.shift_pattern(color)
            .directions
            .iter()
            .map(|&direction| self.route_in(color, source, direction))
            .collect()
    }

    /// Returns the route from `source` to `destination`, ending on the
    /// destination, or `None` if this role cannot get there geometrically.
    pub fn direct_route(self, color: Color, source: Position, destination: Position) -> Option<Route> {
        self.candidate_routes(color, source)
            .iter()
            .find_map(|route| route.truncated_at(destination))
    }

    /// Returns the placement character for this role with the given color.
    pub const fn to_placement_char(self, color: Color) -> char {
        let c = match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            _ => c,
        }
    }

    /// Parses a placement character into a role and color.
    pub const fn from_placement_char(c: char) -> Option<(Role, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let role = match c.to_ascii_lowercase() {
            'p' => Role::Pawn,
            'n' => Role::Knight,
            'b' => Role::Bishop,
            'r' => Role::Rook,
            'q' => Role::Queen,
            'k' => Role::King,
            _ => return None,
        };
        Some((role, color))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Pawn => "Pawn",
            Role::Knight => "Knight",
            Role::Bishop => "Bishop",
            Role::Rook => "Rook",
            Role::Queen => "Queen",
            Role::King => "King",
        };
        write!(f, "{}", name)
    }
}
