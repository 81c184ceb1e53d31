//! Negamax search with alpha-beta pruning
//!
//! Scores are from the point of view of the side to move. `color` is the sign
//! of that side (`Player::sign`), so a cached win score of the player who just
//! moved comes back negative for the node's mover.

use super::state::{order_successors, GameState};
use crate::rules::SCORE_BOUND;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited
    pub nodes: u64,
    /// Total beta cutoffs
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Single-threaded negamax searcher. One per worker.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    trim: Option<usize>,
    stats: SearchStats,
}

impl Searcher {
    /// `trim` limits every node to its first `n` ordered children
    pub fn new(trim: Option<usize>) -> Self {
        Self {
            trim,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of `state` searched `depth` plies deep within `(alpha, beta)`.
    pub fn negamax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        color: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        // Depth exhausted or the last move already won
        if depth == 0 || state.score() != 0 {
            return color * state.score();
        }

        let mut children = state.successors();
        order_successors(&mut children, self.trim);

        // Board full: draw
        if children.is_empty() {
            return color * state.score();
        }

        let mut best = -SCORE_BOUND;
        for child in &children {
            let value = -self.negamax(child, depth - 1, -beta, -alpha, -color);
            best = best.max(value);
            alpha = alpha.max(value);
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    /// Value of playing into `child` for the player who moved into it,
    /// searched with the full window.
    #[inline]
    pub fn evaluate_child(&mut self, child: &GameState, depth: u8) -> i32 {
        let color = child.to_move().sign();
        -self.negamax(child, depth, -SCORE_BOUND, SCORE_BOUND, color)
    }
}
