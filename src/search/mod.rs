//! Search module for the Connect Four AI
//!
//! Contains:
//! - Game tree nodes with successor generation and ordering
//! - Negamax search with alpha-beta pruning
//! - Root-level parallel search across worker threads

pub mod negamax;
pub mod parallel;
pub mod state;

pub use negamax::{SearchStats, Searcher};
pub use parallel::{partition, search_root, PassResult, WorkerResult};
pub use state::{order_successors, GameState};
