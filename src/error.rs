//! Error types for the engine
//!
//! Covers contract violations at the session boundary (bad human moves, bad
//! search depth) and failures inside a parallel search pass.

use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Coordinates outside the board
    #[error("Position ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Target cell already holds a stone
    #[error("Position ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    /// Search depth must be at least one ply
    #[error("Invalid search depth: {depth} (must be at least 1)")]
    InvalidDepth { depth: u8 },

    /// A worker thread of a search pass panicked
    #[error("Search worker {worker} panicked at depth {depth}")]
    WorkerPanicked { worker: usize, depth: u8 },

    /// The game already has a winner
    #[error("Game is over")]
    GameOver,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
