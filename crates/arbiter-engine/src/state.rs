//! The turn / check / checkmate state machine.

use arbiter_core::{Color, Position, Route};
use thiserror::Error;

use crate::rules::{self, attacks, IllegalMove, RuleError};
use crate::{score, Board, InvariantViolation};

/// Error type for move attempts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveError {
    /// The move is not legal in the current state.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    /// The game has already ended in checkmate.
    #[error("game has already ended")]
    GameOver,

    /// The board is missing a king.
    #[error("corrupted board: {0}")]
    Invariant(#[from] InvariantViolation),
}

impl From<RuleError> for MoveError {
    fn from(e: RuleError) -> Self {
        match e {
            RuleError::Illegal(reason) => MoveError::Illegal(reason),
            RuleError::Invariant(violation) => MoveError::Invariant(violation),
        }
    }
}

/// Where a game stands.
///
/// Every transition consumes nothing and returns a fresh state; a rejected
/// move leaves the old state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Normal play; `color` is the side whose move it is (or, straight after
    /// [`GameState::apply_move`], the side that just moved).
    InTurn { board: Board, color: Color },
    /// `color` is in check along `attack_routes` and must get out of it.
    /// Each route runs from the king back to an attacker.
    InCheck {
        board: Board,
        color: Color,
        attack_routes: Vec<Route>,
    },
    /// `color` has been mated. Terminal.
    CheckMate { board: Board, color: Color },
}

impl GameState {
    /// Starts a game with White to move.
    pub fn new(board: Board) -> Self {
        GameState::InTurn {
            board,
            color: Color::White,
        }
    }

    pub fn board(&self) -> &Board {
        match self {
            GameState::InTurn { board, .. }
            | GameState::InCheck { board, .. }
            | GameState::CheckMate { board, .. } => board,
        }
    }

    /// The side this state concerns: to move, in check, or mated.
    pub fn color(&self) -> Color {
        match self {
            GameState::InTurn { color, .. }
            | GameState::InCheck { color, .. }
            | GameState::CheckMate { color, .. } => *color,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameState::CheckMate { .. })
    }

    pub fn is_check(&self) -> bool {
        matches!(self, GameState::InCheck { .. })
    }

    /// Validates and plays a move for the side to move.
    ///
    /// On success the result is `InCheck` for the opponent when the move
    /// gives check, and `InTurn` for the mover otherwise. Call
    /// [`GameState::next_state`] afterwards to hand the turn over.
    pub fn apply_move(&self, source: Position, destination: Position) -> Result<GameState, MoveError> {
        let (board, color) = match self {
            GameState::CheckMate { .. } => return Err(MoveError::GameOver),
            GameState::InTurn { board, color } | GameState::InCheck { board, color, .. } => (board, *color),
        };

        let board = rules::try_move(board, color, source, destination).map_err(|e| {
            tracing::debug!(%color, %source, %destination, error = %e, "move rejected");
            e
        })?;

        if attacks::is_checked_by(&board, color)? {
            let attack_routes = attacks::attack_routes(&board, color)?;
            let checked = color.opposite();
            tracing::info!(%checked, attackers = attack_routes.len(), "check");
            return Ok(GameState::InCheck {
                board,
                color: checked,
                attack_routes,
            });
        }

        Ok(GameState::InTurn { board, color })
    }

    /// Advances the game after a move.
    ///
    /// `InTurn` passes the turn to the other side. `InCheck` stays as it is
    /// if the checked side has any escape, and becomes `CheckMate` if not.
    pub fn next_state(self) -> Result<GameState, InvariantViolation> {
        match self {
            GameState::InTurn { board, color } => Ok(GameState::InTurn {
                board,
                color: color.opposite(),
            }),
            GameState::InCheck {
                board,
                color,
                attack_routes,
            } => {
                if rules::can_escape(&board, color, &attack_routes)? {
                    Ok(GameState::InCheck {
                        board,
                        color,
                        attack_routes,
                    })
                } else {
                    tracing::info!(mated = %color, "checkmate");
                    Ok(GameState::CheckMate { board, color })
                }
            }
            finished @ GameState::CheckMate { .. } => Ok(finished),
        }
    }

    /// Lists the legal moves for the side to move; none once the game is over.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        match self {
            GameState::CheckMate { .. } => Vec::new(),
            GameState::InTurn { board, color } | GameState::InCheck { board, color, .. } => {
                rules::legal_moves(board, *color)
            }
        }
    }

    /// Material score of `color` on the current board.
    pub fn score(&self, color: Color) -> f64 {
        score::material(self.board(), color)
    }

    /// The side with more material, or `Neutral` on a tie.
    ///
    /// This holds for checkmate too: the mated side can still be reported as
    /// the winner if it is ahead on material.
    pub fn winner(&self) -> Color {
        score::winner(self.board())
    }
}
