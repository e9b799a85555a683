//! 8-Puzzle Solver - CLI
//!
//! Best-first search over the 3×3 sliding-tile puzzle with a Manhattan
//! distance heuristic.

use anyhow::Result;
use clap::{Parser, Subcommand};
use eight_puzzle::{
    commands::{analyze_board, run_benchmark, run_simple, solve_board},
    core::Board,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    scramble::{random_board, random_walk},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "eight_puzzle",
    about = "8-puzzle solver using best-first search with a Manhattan distance heuristic",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board given as nine values, row-major (0 is the blank)
    Solve {
        /// The board, e.g. "8 1 3 4 0 2 7 6 5"
        board: String,

        /// Print only the move list, not every intermediate board
        #[arg(short, long)]
        moves_only: bool,
    },

    /// Show the heuristic breakdown and solvability of a board
    Analyze {
        /// The board, e.g. "8 1 3 4 0 2 7 6 5"
        board: String,
    },

    /// Generate a random solvable board
    Scramble {
        /// Number of random moves to walk away from the goal
        #[arg(short = 'n', long, default_value_t = 25)]
        steps: usize,

        /// Draw a uniformly random solvable permutation instead of walking
        #[arg(long)]
        full: bool,

        /// Seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Benchmark the solver on random boards
    Benchmark {
        /// Number of boards to solve
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Scramble with a random walk of this length instead of full shuffles
        #[arg(long)]
        walk: Option<usize>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive mode: enter a board cell by cell (default)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Solve { board, moves_only } => run_solve_command(&board, moves_only),
        Commands::Analyze { board } => run_analyze_command(&board),
        Commands::Scramble { steps, full, seed } => {
            run_scramble_command(steps, full, seed);
            Ok(())
        }
        Commands::Benchmark { count, walk, seed } => {
            run_benchmark_command(count, walk, seed);
            Ok(())
        }
        Commands::Simple => run_simple().map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_solve_command(board: &str, moves_only: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let result = solve_board(board);
    print_solve_result(&result, !moves_only);
    Ok(())
}

fn run_analyze_command(board: &str) -> Result<()> {
    let board: Board = board.parse()?;
    let result = analyze_board(board);
    print_analysis_result(&result);
    Ok(())
}

fn run_scramble_command(steps: usize, full: bool, seed: Option<u64>) {
    let mut rng = seeded_rng(seed);
    let board = if full {
        random_board(&mut rng)
    } else {
        random_walk(Board::GOAL, steps, &mut rng)
    };

    let cells: Vec<String> = board.cells().iter().map(ToString::to_string).collect();
    println!("{}", cells.join(" "));
    println!("\n{board}");
}

fn run_benchmark_command(count: usize, walk: Option<usize>, seed: Option<u64>) {
    let mut rng = seeded_rng(seed);
    let boards: Vec<Board> = (0..count)
        .map(|_| match walk {
            Some(steps) => random_walk(Board::GOAL, steps, &mut rng),
            None => random_board(&mut rng),
        })
        .collect();

    println!("Solving {count} random boards...");
    let result = run_benchmark(&boards);
    print_benchmark_result(&result);
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
