//! Board solving command
//!
//! Runs one search on a supplied board and packages the outcome for display.

use crate::core::Board;
use crate::solver::{PathStep, solve};
use std::time::{Duration, Instant};

/// Result of solving a single board
pub struct SolveResult {
    /// Whether a path to the goal was found
    pub solved: bool,
    /// The board the search started from
    pub initial: Board,
    /// Path from the initial board to the goal, root first; empty on failure
    pub steps: Vec<PathStep>,
    /// Number of moves in the solution
    pub moves: usize,
    /// Nodes expanded during the search
    pub expanded: usize,
    /// Nodes generated during the search
    pub generated: usize,
    /// Wall-clock time spent searching
    pub duration: Duration,
}

/// Solve one board, timing the search
#[must_use]
pub fn solve_board(initial: Board) -> SolveResult {
    let start = Instant::now();
    let outcome = solve(initial);
    let duration = start.elapsed();

    match outcome {
        Some(solution) => SolveResult {
            solved: true,
            initial,
            moves: solution.moves(),
            expanded: solution.expanded,
            generated: solution.generated,
            steps: solution.steps,
            duration,
        },
        None => SolveResult {
            solved: false,
            initial,
            steps: Vec::new(),
            moves: 0,
            expanded: 0,
            generated: 0,
            duration,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_board_records_path() {
        let initial = Board::new([1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
        let result = solve_board(initial);

        assert!(result.solved);
        assert_eq!(result.moves, 1);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.initial, initial);
        assert!(result.steps[result.steps.len() - 1].board.is_goal());
    }

    #[test]
    fn solve_board_reports_failure_without_partial_path() {
        let initial = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let result = solve_board(initial);

        assert!(!result.solved);
        assert!(result.steps.is_empty());
        assert_eq!(result.moves, 0);
    }
}
