//! Best-first search for the 8-puzzle
//!
//! The engine composes the Manhattan distance estimator, the node arena,
//! and the frontier/closed-set bookkeeping, and reconstructs the move
//! sequence once the goal is reached.

pub mod engine;
pub mod heuristic;
pub mod node;
pub mod path;

pub use engine::{Solution, Solver, solve};
pub use heuristic::{goal_position, manhattan_distance};
pub use node::SearchNode;
pub use path::PathStep;
