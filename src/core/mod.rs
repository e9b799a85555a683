//! Core domain types for the 8-puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod board;
mod moves;

pub use board::{Board, BoardError, CELLS, SIDE};
pub use moves::Move;
