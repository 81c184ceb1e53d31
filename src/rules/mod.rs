//! Game rules for Connect Four
//!
//! This module implements the win condition: four in a row through the last
//! move, horizontally, vertically or diagonally.

pub mod win;

// Re-exports for convenient access
pub use win::{check_outcome, winning_line, SCORE_BOUND, WIN_LENGTH, WIN_SCORE};
