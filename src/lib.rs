//! 8-Puzzle Solver
//!
//! Solves the 3×3 sliding-tile puzzle with best-first search guided by the
//! Manhattan distance heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use eight_puzzle::core::Board;
//! use eight_puzzle::solver::solve;
//!
//! let board: Board = "8 1 3 4 0 2 7 6 5".parse().unwrap();
//!
//! let solution = solve(board).expect("this board is solvable");
//! assert!(solution.steps.last().unwrap().board.is_goal());
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod solver;

// Random board generation
pub mod scramble;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
