//! Manhattan distance heuristic
//!
//! The standard admissible, consistent estimate for sliding-tile puzzles:
//! the sum over all non-blank tiles of the grid distance between the tile's
//! current position and its goal position. It never overestimates the true
//! remaining move count, so best-first expansion by `g + h` is meaningful.

use crate::core::{Board, SIDE};

/// Goal position of a tile value, row-major
///
/// # Panics
/// Panics if `value` is 0 (the blank has no goal tile position here) or
/// out of range.
#[inline]
#[must_use]
pub fn goal_position(value: u8) -> (usize, usize) {
    assert!(value >= 1 && usize::from(value) < SIDE * SIDE);
    let index = usize::from(value) - 1;
    (index / SIDE, index % SIDE)
}

/// Manhattan distance of one tile from its goal position
#[inline]
#[must_use]
pub fn tile_distance(row: usize, col: usize, value: u8) -> u32 {
    let (goal_row, goal_col) = goal_position(value);
    (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
}

/// Admissible lower bound on the number of moves from `board` to the goal
///
/// Returns 0 iff `board` is the goal.
#[must_use]
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for row in 0..SIDE {
        for col in 0..SIDE {
            let value = board.get(row, col);
            if value != 0 {
                distance += tile_distance(row, col, value);
            }
        }
    }
    distance
}
