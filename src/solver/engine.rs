//! Best-first search engine
//!
//! Explores the puzzle state space in order of `f = g + h` until it pops
//! the goal or exhausts the frontier. Expanded boards are closed by
//! canonical key and never reconsidered, even if a cheaper path to one of
//! them turns up later; with the consistent Manhattan heuristic the first
//! expansion already carries the cheapest `g`, so nothing is lost.

use super::heuristic::manhattan_distance;
use super::node::{NodeId, SearchNode};
use super::path::{PathStep, reconstruct};
use crate::core::{Board, Move};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A successful search result
#[derive(Debug, Clone)]
pub struct Solution {
    /// The path from the initial board to the goal, root first
    pub steps: Vec<PathStep>,
    /// Number of nodes whose successors were generated
    pub expanded: usize,
    /// Number of nodes created, the root included
    pub generated: usize,
}

impl Solution {
    /// Number of moves in the solution (one less than the step count)
    #[must_use]
    pub fn moves(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Frontier entry: `f` with an insertion sequence number for stable ties
///
/// Ordered as a min-heap element: lower `f` wins, and among equal `f` the
/// earlier-inserted entry wins, matching a stable sort of the frontier.
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-use search over one initial board
///
/// Owns the node arena, the open set, and the closed set for the duration
/// of the search. The open set is a heap keyed by `(f, insertion order)`;
/// `open_best` tracks the minimal `f` currently on the frontier per board
/// key so the duplicate check stays cheap without changing which
/// candidates are kept or skipped.
pub struct Solver {
    nodes: Vec<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    open_best: FxHashMap<u64, u32>,
    closed: FxHashSet<u64>,
    seq: u64,
    expanded: usize,
}

impl Solver {
    /// Bootstrap a search with the root node on the frontier
    #[must_use]
    pub fn new(initial: Board) -> Self {
        let root = SearchNode {
            board: initial,
            g: 0,
            h: manhattan_distance(&initial),
            parent: None,
            movement: None,
        };
        let mut solver = Self {
            nodes: vec![root],
            open: BinaryHeap::new(),
            open_best: FxHashMap::default(),
            closed: FxHashSet::default(),
            seq: 0,
            expanded: 0,
        };
        solver.push_open(0);
        solver
    }

    /// Run the expansion loop to completion
    ///
    /// Returns the reconstructed path when the goal is popped, or `None`
    /// once the frontier is exhausted. Exhaustion is the normal outcome
    /// for boards of the wrong solvability parity; the loop always
    /// terminates because the state space is finite and closed boards are
    /// never reopened.
    #[must_use]
    pub fn run(mut self) -> Option<Solution> {
        while let Some(OpenEntry { id, .. }) = self.open.pop() {
            let node = self.nodes[id];
            self.closed.insert(node.board.canonical_key());

            if node.board.is_goal() {
                return Some(Solution {
                    steps: reconstruct(&self.nodes, id),
                    expanded: self.expanded,
                    generated: self.nodes.len(),
                });
            }

            self.expanded += 1;
            for movement in Move::ALL {
                let Some(next) = node.board.apply(movement) else {
                    continue;
                };
                let key = next.canonical_key();
                if self.closed.contains(&key) {
                    continue;
                }

                let g = node.g + 1;
                let h = manhattan_distance(&next);
                if let Some(&best) = self.open_best.get(&key) {
                    // An open candidate for this board is at least as good.
                    if best <= g + h {
                        continue;
                    }
                }

                let child = self.nodes.len();
                self.nodes.push(SearchNode {
                    board: next,
                    g,
                    h,
                    parent: Some(id),
                    movement: Some(movement),
                });
                self.push_open(child);
            }
        }

        None
    }

    fn push_open(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let f = node.f();
        let key = node.board.canonical_key();

        self.open.push(OpenEntry { f, seq: self.seq, id });
        self.seq += 1;

        self.open_best
            .entry(key)
            .and_modify(|best| *best = (*best).min(f))
            .or_insert(f);
    }
}

/// Search for a minimal-cost move sequence from `initial` to the goal
///
/// Returns `None` when no path exists.
///
/// # Examples
/// ```
/// use eight_puzzle::core::Board;
/// use eight_puzzle::solver::solve;
///
/// let board = Board::new([1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
/// let solution = solve(board).unwrap();
/// assert_eq!(solution.moves(), 1);
/// ```
#[must_use]
pub fn solve(initial: Board) -> Option<Solution> {
    Solver::new(initial).run()
}
