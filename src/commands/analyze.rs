//! Board analysis command
//!
//! Breaks down the heuristic estimate tile by tile and reports the
//! solvability parity of a board without running the search.

use crate::core::{Board, SIDE};
use crate::solver::{heuristic::tile_distance, manhattan_distance};

/// Distance contribution of one tile
pub struct TileDistance {
    pub value: u8,
    pub distance: u32,
}

/// Result of analyzing a board
pub struct AnalysisResult {
    pub board: Board,
    /// Total Manhattan distance to the goal
    pub manhattan: u32,
    /// Per-tile distances for the misplaced tiles, in tile-value order
    pub misplaced: Vec<TileDistance>,
    /// Inversion count among the non-blank tiles
    pub inversions: usize,
    /// Whether the goal is reachable
    pub solvable: bool,
}

/// Analyze a board's heuristic estimate and parity
#[must_use]
pub fn analyze_board(board: Board) -> AnalysisResult {
    let mut misplaced = Vec::new();
    for row in 0..SIDE {
        for col in 0..SIDE {
            let value = board.get(row, col);
            if value == 0 {
                continue;
            }
            let distance = tile_distance(row, col, value);
            if distance > 0 {
                misplaced.push(TileDistance { value, distance });
            }
        }
    }
    misplaced.sort_by_key(|tile| tile.value);

    AnalysisResult {
        board,
        manhattan: manhattan_distance(&board),
        misplaced,
        inversions: board.inversions(),
        solvable: board.is_solvable(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_has_nothing_misplaced() {
        let result = analyze_board(Board::GOAL);

        assert_eq!(result.manhattan, 0);
        assert!(result.misplaced.is_empty());
        assert_eq!(result.inversions, 0);
        assert!(result.solvable);
    }

    #[test]
    fn misplaced_distances_sum_to_manhattan() {
        let board = Board::new([8, 1, 3, 4, 0, 2, 7, 6, 5]).unwrap();
        let result = analyze_board(board);

        let total: u32 = result.misplaced.iter().map(|tile| tile.distance).sum();
        assert_eq!(total, result.manhattan);
        assert_eq!(result.manhattan, 10);
    }

    #[test]
    fn unsolvable_board_flagged() {
        let board = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let result = analyze_board(board);

        assert_eq!(result.inversions, 1);
        assert!(!result.solvable);
    }

    #[test]
    fn misplaced_sorted_by_tile_value() {
        let board = Board::new([8, 1, 3, 4, 0, 2, 7, 6, 5]).unwrap();
        let result = analyze_board(board);

        let values: Vec<u8> = result.misplaced.iter().map(|tile| tile.value).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
    }
}
