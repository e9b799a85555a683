//! Benchmark command
//!
//! Solves a batch of boards in parallel and aggregates search statistics.

use super::solve::{SolveResult, solve_board};
use crate::core::Board;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub solved: usize,
    pub average_moves: f64,
    pub min_moves: usize,
    pub max_moves: usize,
    pub total_expanded: usize,
    pub average_expanded: f64,
    /// Move count -> number of boards solved in that many moves
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Solve every board and aggregate the outcomes
///
/// Each search is independent and single-threaded; the batch is spread
/// across a rayon pool.
#[must_use]
pub fn run_benchmark(boards: &[Board]) -> BenchmarkResult {
    let pb = ProgressBar::new(boards.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<SolveResult> = boards
        .par_iter()
        .map(|&board| {
            let result = solve_board(board);
            pb.inc(1);
            result
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut solved = 0;
    let mut total_moves = 0;
    let mut min_moves = usize::MAX;
    let mut max_moves = 0;
    let mut total_expanded = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for result in &results {
        if !result.solved {
            continue;
        }
        solved += 1;
        total_moves += result.moves;
        min_moves = min_moves.min(result.moves);
        max_moves = max_moves.max(result.moves);
        total_expanded += result.expanded;
        *distribution.entry(result.moves).or_insert(0) += 1;
    }

    let total_boards = boards.len();
    BenchmarkResult {
        total_boards,
        solved,
        average_moves: if solved > 0 {
            total_moves as f64 / solved as f64
        } else {
            0.0
        },
        min_moves: if solved > 0 { min_moves } else { 0 },
        max_moves,
        total_expanded,
        average_expanded: if solved > 0 {
            total_expanded as f64 / solved as f64
        } else {
            0.0
        },
        distribution,
        duration,
        boards_per_second: total_boards as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scramble::random_walk;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn walk_boards(count: usize, steps: usize) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(17);
        (0..count)
            .map(|_| random_walk(Board::GOAL, steps, &mut rng))
            .collect()
    }

    #[test]
    fn benchmark_solves_short_scrambles() {
        let boards = walk_boards(8, 10);
        let result = run_benchmark(&boards);

        assert_eq!(result.total_boards, 8);
        assert_eq!(result.solved, 8);
        assert!(result.max_moves <= 10);
        assert!(result.average_moves <= result.max_moves as f64);
        assert!(result.average_moves >= result.min_moves as f64);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let boards = walk_boards(6, 8);
        let result = run_benchmark(&boards);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_counts_unsolvable_boards_as_unsolved() {
        let unsolvable = Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let result = run_benchmark(&[Board::GOAL, unsolvable]);

        assert_eq!(result.total_boards, 2);
        assert_eq!(result.solved, 1);
        assert_eq!(result.min_moves, 0);
    }

    #[test]
    fn benchmark_empty_batch() {
        let result = run_benchmark(&[]);

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.average_moves, 0.0);
    }
}
