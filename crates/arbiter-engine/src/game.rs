//! Game facade for front ends.
//!
//! [`Game`] owns the current [`GameState`] and runs both halves of a turn
//! (validate-and-play, then advance) as one step. It is the surface an input
//! loop, a renderer or a persistence layer talks to.

use std::collections::BTreeMap;

use arbiter_core::{Color, Occupant, Position};

use crate::config::EngineConfig;
use crate::placement::{self, PlacementError};
use crate::state::{GameState, MoveError};
use crate::{Board, Score};

/// How to lay out the board at the start of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSetup {
    /// The standard starting layout.
    Initial,
    /// A previously saved placement string.
    Placement(String),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting layout, White to move.
    pub fn new() -> Self {
        Game {
            state: GameState::new(Board::initial()),
        }
    }

    /// Creates a game from a setup, decoding stored placements per `config`.
    ///
    /// Placement strings carry no side to move, so White always moves first.
    pub fn from_setup(setup: GameSetup, config: &EngineConfig) -> Result<Self, PlacementError> {
        let board = match setup {
            GameSetup::Initial => Board::initial(),
            GameSetup::Placement(placement) => placement::decode_with(&placement, config.decode)?,
        };
        tracing::debug!(placement = %placement::encode(&board), "game set up");
        Ok(Game {
            state: GameState::new(board),
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays a move and advances the turn.
    ///
    /// The game is unchanged if the move is rejected.
    pub fn apply_move(&mut self, source: Position, destination: Position) -> Result<(), MoveError> {
        let next = self.state.apply_move(source, destination)?.next_state()?;
        self.state = next;
        Ok(())
    }

    /// Returns true once the game has ended in checkmate.
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.state.is_check()
    }

    /// Returns the side to move (the mated side once finished).
    pub fn turn(&self) -> Color {
        self.state.color()
    }

    /// Returns both sides' material and the side ahead.
    pub fn score(&self) -> Score {
        Score::of(self.state.board())
    }

    /// Returns the side ahead on material, `Neutral` on a tie.
    pub fn winner(&self) -> Color {
        self.state.winner()
    }

    /// Returns all legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        self.state.legal_moves()
    }

    /// Returns a read-only copy of every square, for rendering.
    pub fn board_snapshot(&self) -> BTreeMap<Position, Occupant> {
        self.state.board().snapshot()
    }

    /// Returns the placement string for saving.
    pub fn placement(&self) -> String {
        placement::encode(self.state.board())
    }
}
