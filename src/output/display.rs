//! Display functions for command results

use super::formatters::{board_lines, create_progress_bar, move_arrow};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Board;
use colored::Colorize;

/// Print the fixed goal configuration
pub fn print_goal_banner() {
    println!("Goal board:");
    for line in board_lines(&Board::GOAL) {
        println!("{line}");
    }
    println!();
}

/// Print the result of solving a board
///
/// With `show_boards` every intermediate board is printed; otherwise only
/// the move list and the search statistics.
pub fn print_solve_result(result: &SolveResult, show_boards: bool) {
    println!("{}", "─".repeat(60).cyan());

    if !result.solved {
        println!("{}", "No solution found.".red().bold());
        println!("This board cannot reach the goal configuration.");
        println!("{}", "─".repeat(60).cyan());
        return;
    }

    println!(
        "Solved in {} moves",
        result.moves.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        match step.movement {
            None => println!("\nStart:"),
            Some(movement) => println!(
                "\nMove {}: {} {}",
                i,
                movement.to_string().bright_white().bold(),
                move_arrow(movement)
            ),
        }
        if show_boards {
            for line in board_lines(&step.board) {
                println!("  {line}");
            }
        }
    }

    println!("\nSearch statistics:");
    println!("   Nodes expanded:   {}", result.expanded);
    println!("   Nodes generated:  {}", result.generated);
    println!("   Time taken:       {:.3}ms", result.duration.as_secs_f64() * 1000.0);
    println!();
}

/// Print the result of board analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!();
    for line in board_lines(&result.board) {
        println!("  {line}");
    }

    println!(
        "\n   Manhattan distance:  {}",
        result.manhattan.to_string().bright_yellow()
    );
    println!("   Inversions:          {}", result.inversions);
    if result.solvable {
        println!("   Solvable:            {}", "yes".green());
    } else {
        println!("   Solvable:            {}", "no".red().bold());
    }

    if !result.misplaced.is_empty() {
        println!("\n   Misplaced tiles:");
        for tile in &result.misplaced {
            let plural = if tile.distance == 1 { "move" } else { "moves" };
            println!(
                "     tile {}: {} {} from its slot",
                tile.value, tile.distance, plural
            );
        }
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}/{}", result.solved, result.total_boards);
    println!(
        "   Average moves:    {}",
        format!("{:.2}", result.average_moves).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_moves.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_moves.to_string().yellow()
    );
    println!("   Nodes expanded:   {} total", result.total_expanded);
    println!("   Avg expanded:     {:.1} per board", result.average_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.solved > 0 {
        println!("\n{}", "Move distribution:".bright_cyan().bold());
        let mut counts: Vec<(usize, usize)> = result
            .distribution
            .iter()
            .map(|(&moves, &count)| (moves, count))
            .collect();
        counts.sort_unstable();

        let max_count = counts.iter().map(|&(_, count)| count).max().unwrap_or(1);
        for (moves, count) in counts {
            let bar = create_progress_bar(count as f64, max_count as f64, 30);
            println!("   {moves:3}: {} {count}", bar.green());
        }
    }
    println!();
}
