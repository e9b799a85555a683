//! Random board generation
//!
//! Two ways to produce solvable starting positions: shuffling a fresh
//! permutation until its parity matches the goal, or walking a given board
//! with random legal moves.

use crate::core::{Board, CELLS, Move};
use rand::Rng;
use rand::seq::SliceRandom;

/// Generate a uniformly random solvable board
///
/// Shuffles the full permutation and retries on the wrong parity class;
/// half of all permutations qualify, so this terminates quickly.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    let mut cells: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    loop {
        cells.shuffle(rng);
        // Shuffling a permutation keeps the Board invariant intact.
        if let Ok(board) = Board::new(cells) {
            if board.is_solvable() {
                return board;
            }
        }
    }
}

/// Scramble a board by applying `steps` random legal moves
///
/// Never immediately undoes the previous move, so short walks do not
/// collapse back to the start. The result stays in the start board's
/// parity class, so walking from the goal always yields a solvable board.
pub fn random_walk<R: Rng>(start: Board, steps: usize, rng: &mut R) -> Board {
    let mut board = start;
    let mut last: Option<Move> = None;

    for _ in 0..steps {
        let candidates: Vec<(Move, Board)> = Move::ALL
            .into_iter()
            .filter(|&movement| last != Some(movement.opposite()))
            .filter_map(|movement| board.apply(movement).map(|next| (movement, next)))
            .collect();

        // At least two moves are legal from any cell, and at most one of
        // them is the undo, so candidates is never empty.
        let (movement, next) = candidates[rng.random_range(0..candidates.len())];
        board = next;
        last = Some(movement);
    }

    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_board_is_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert!(random_board(&mut rng).is_solvable());
        }
    }

    #[test]
    fn random_board_is_deterministic_per_seed() {
        let a = random_board(&mut StdRng::seed_from_u64(42));
        let b = random_board(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_walk_preserves_solvability() {
        let mut rng = StdRng::seed_from_u64(11);
        for steps in [0, 1, 5, 30] {
            let board = random_walk(Board::GOAL, steps, &mut rng);
            assert!(board.is_solvable());
        }
    }

    #[test]
    fn random_walk_zero_steps_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random_walk(Board::GOAL, 0, &mut rng), Board::GOAL);
    }

    #[test]
    fn random_walk_single_step_leaves_goal() {
        let mut rng = StdRng::seed_from_u64(5);
        let board = random_walk(Board::GOAL, 1, &mut rng);
        assert!(!board.is_goal());
    }

    #[test]
    fn short_walks_stay_solvable_by_search() {
        use crate::solver::solve;

        let mut rng = StdRng::seed_from_u64(9);
        let board = random_walk(Board::GOAL, 12, &mut rng);
        let solution = solve(board).unwrap();
        assert!(solution.moves() <= 12);
    }
}
