//! Solution path reconstruction
//!
//! Walks parent links from a goal node back to the root and reverses the
//! result into a forward move sequence.

use super::node::{NodeId, SearchNode};
use crate::core::{Board, Move};

/// One entry of a solution path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    /// Direction the blank moved to reach this board; `None` only for the root
    pub movement: Option<Move>,
    /// The board after the move
    pub board: Board,
    /// Move count from the initial board
    pub g: u32,
}

/// Collect the path from the root to `goal`, root first
///
/// The root entry carries no move label; every later entry carries the
/// move that produced it. The parent chain is acyclic, so the walk always
/// terminates at the root.
#[must_use]
pub(crate) fn reconstruct(nodes: &[SearchNode], goal: NodeId) -> Vec<PathStep> {
    let mut steps = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        let node = &nodes[id];
        steps.push(PathStep {
            movement: node.movement,
            board: node.board,
            g: node.g,
        });
        current = node.parent;
    }

    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_orders_root_first() {
        let root_board = Board::new([1, 2, 3, 4, 5, 0, 7, 8, 6]).unwrap();
        let nodes = vec![
            SearchNode {
                board: root_board,
                g: 0,
                h: 1,
                parent: None,
                movement: None,
            },
            SearchNode {
                board: Board::GOAL,
                g: 1,
                h: 0,
                parent: Some(0),
                movement: Some(Move::Down),
            },
        ];

        let steps = reconstruct(&nodes, 1);

        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].board, root_board);
        assert_eq!(steps[0].movement, None);
        assert_eq!(steps[0].g, 0);
        assert_eq!(steps[1].board, Board::GOAL);
        assert_eq!(steps[1].movement, Some(Move::Down));
        assert_eq!(steps[1].g, 1);
    }

    #[test]
    fn reconstruct_single_node() {
        let nodes = vec![SearchNode {
            board: Board::GOAL,
            g: 0,
            h: 0,
            parent: None,
            movement: None,
        }];

        let steps = reconstruct(&nodes, 0);

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].movement, None);
    }
}
