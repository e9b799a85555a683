//! Search tree nodes
//!
//! Nodes are created once and never mutated. Parent links are indices into
//! the arena owned by the engine, so the tree is append-only and acyclic
//! by construction: each node's board differs from its parent's by one tile
//! swap and `g` strictly increases along any parent chain.

use crate::core::{Board, Move};

/// Index of a node in the engine's arena
pub type NodeId = usize;

/// A board together with its search bookkeeping
#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    /// The configuration this node represents
    pub board: Board,
    /// Path cost from the root, in moves
    pub g: u32,
    /// Heuristic estimate of remaining cost, fixed at creation
    pub h: u32,
    /// Arena index of the node that generated this one; `None` for the root
    pub parent: Option<NodeId>,
    /// Direction the blank moved to reach this board; `None` for the root
    pub movement: Option<Move>,
}

impl SearchNode {
    /// Total estimated cost, the expansion-ordering key
    #[inline]
    #[must_use]
    pub const fn f(&self) -> u32 {
        self.g + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_is_sum_of_g_and_h() {
        let node = SearchNode {
            board: Board::GOAL,
            g: 3,
            h: 7,
            parent: None,
            movement: None,
        };
        assert_eq!(node.f(), 10);
    }
}
