//! Simple interactive CLI mode
//!
//! Prompts for the nine cells one value at a time, re-asking on invalid
//! input, then prints the step-by-step transformation to the goal.

use super::solve::solve_board;
use crate::core::{Board, BoardError, CELLS, SIDE};
use crate::output::{print_goal_banner, print_solve_result};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              8-Puzzle Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter the initial board configuration, one value per prompt.");
    println!("Use the numbers 0-8 exactly once each; 0 is the blank.\n");

    loop {
        let board = read_board()?;

        println!("\nInitial board:\n{board}");
        print_goal_banner();

        let result = solve_board(board);
        print_solve_result(&result, true);

        match get_user_input("Solve another board? (yes/no)")?
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!(),
            _ => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
        }
    }
}

/// Read a full board from the terminal, cell by cell
///
/// Each prompt repeats until the value parses, lies in 0-8, and has not
/// been used yet, so the finished grid is always a valid permutation.
fn read_board() -> Result<Board, String> {
    let mut cells = [0u8; CELLS];
    let mut used = [false; CELLS];

    for index in 0..CELLS {
        let row = index / SIDE;
        let col = index % SIDE;

        loop {
            let input = get_user_input(&format!("Value at position [{row},{col}]"))?;
            let Ok(value) = input.parse::<u8>() else {
                println!("Invalid input. Please enter a number between 0 and 8.");
                continue;
            };
            if usize::from(value) >= CELLS {
                println!("Invalid input. Please enter a number between 0 and 8.");
                continue;
            }
            if used[usize::from(value)] {
                println!("Value {value} is already placed. Each value may appear once.");
                continue;
            }

            cells[index] = value;
            used[usize::from(value)] = true;
            break;
        }
    }

    Board::new(cells).map_err(|e: BoardError| e.to_string())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
