//! Formatting utilities for terminal output

use crate::core::{Board, Move, SIDE};
use crate::solver::goal_position;
use colored::Colorize;

/// Arrow glyph for a move direction
#[must_use]
pub const fn move_arrow(movement: Move) -> &'static str {
    match movement {
        Move::Up => "↑",
        Move::Down => "↓",
        Move::Left => "←",
        Move::Right => "→",
    }
}

/// Render a board as colored grid lines
///
/// Tiles already in their goal position are green, misplaced tiles yellow,
/// and the blank a dim dot.
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    (0..SIDE)
        .map(|row| {
            (0..SIDE)
                .map(|col| {
                    let value = board.get(row, col);
                    if value == 0 {
                        "·".bright_black().to_string()
                    } else if goal_position(value) == (row, col) {
                        value.to_string().green().to_string()
                    } else {
                        value.to_string().yellow().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_cover_all_moves() {
        let arrows: Vec<&str> = Move::ALL.into_iter().map(move_arrow).collect();
        assert_eq!(arrows, vec!["↑", "↓", "←", "→"]);
    }

    #[test]
    fn board_lines_has_three_rows() {
        let lines = board_lines(&Board::GOAL);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
