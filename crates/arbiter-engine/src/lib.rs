//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - one occupant per square, copied rather than mutated
//! - [`placement`] - encoding boards as placement strings (the board field of FEN)
//! - [`rules`] - move validation and attack scanning
//! - [`GameState`] - the in-turn / in-check / checkmate state machine
//! - [`Score`] - material scoring
//! - [`Game`] - a facade for input, display and persistence layers
//! - [`EngineConfig`] - TOML configuration
//!
//! # Example
//!
//! ```
//! use arbiter_core::Position;
//! use arbiter_engine::Game;
//!
//! let square = |s: &str| Position::from_algebraic(s).unwrap();
//! let mut game = Game::new();
//! game.apply_move(square("e2"), square("e4")).unwrap();
//! game.apply_move(square("e7"), square("e5")).unwrap();
//! println!("Position after 1.e4 e5: {}", game.placement());
//! ```

mod board;
pub mod config;
mod game;
pub mod placement;
pub mod rules;
mod score;
mod state;

pub use board::{Board, InvariantViolation};
pub use config::{ConfigError, EngineConfig};
pub use game::{Game, GameSetup};
pub use placement::{DecodeMode, PlacementError};
pub use rules::IllegalMove;
pub use score::Score;
pub use state::{GameState, MoveError};
