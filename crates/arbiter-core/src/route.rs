//! Routes a piece travels along.

use serde::Serialize;

use crate::{Direction, Position};

/// An ordered run of squares in one direction.
///
/// The source square is never part of a route; the destination always is
/// the last entry. An empty route means there is no geometric path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    direction: Direction,
    positions: Vec<Position>,
}

impl Route {
    /// Creates a route from its direction and squares.
    pub fn new(direction: Direction, positions: Vec<Position>) -> Self {
        Route {
            direction,
            positions,
        }
    }

    /// Creates a route with no squares.
    pub fn empty(direction: Direction) -> Self {
        Route::new(direction, Vec::new())
    }

    /// Walks from `source` in `direction`, taking at most `limit` steps.
    pub fn walk(source: Position, direction: Direction, limit: usize) -> Self {
        let positions = std::iter::successors(source.next(direction), |p| p.next(direction))
            .take(limit)
            .collect();
        Route::new(direction, positions)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the last square of the route.
    pub fn destination(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    /// Returns true if `position` lies on the route.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Cuts the route off right after `destination`.
    ///
    /// Returns `None` if the destination is not on the route.
    pub fn truncated_at(&self, destination: Position) -> Option<Route> {
        let end = self.positions.iter().position(|&p| p == destination)?;
        Some(Route::new(self.direction, self.positions[..=end].to_vec()))
    }

    /// Flips the route so it runs from its destination back to `source`.
    ///
    /// The old destination is dropped and `source` becomes the new last
    /// square. For an attack route this yields every square a defender could
    /// block on, plus the attacker's own square.
    pub fn reversed_toward(&self, source: Position) -> Route {
        let mut positions: Vec<Position> = match self.positions.split_last() {
            Some((_, before)) => before.iter().rev().copied().collect(),
            None => Vec::new(),
        };
        positions.push(source);
        Route::new(self.direction.opposite(), positions)
    }
}
