//! Core types for chess rules.
//!
//! This crate provides the geometry and movement model the engine builds on:
//! - [`Position`] and [`Direction`] for board coordinates
//! - [`Route`] for the squares a piece passes through
//! - [`Role`], [`ShiftPattern`] and [`Movement`] for per-piece movement capability
//! - [`Piece`] and [`Occupant`] for what sits on a square, and route validation
//!   against occupancy

mod color;
mod direction;
mod piece;
mod position;
mod role;
mod route;

pub use color::Color;
pub use direction::Direction;
pub use piece::{Occupant, Piece};
pub use position::{Position, PositionError};
pub use role::{Movement, Role, ShiftPattern};
pub use route::Route;
