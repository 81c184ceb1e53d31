//! Connect Four AI engine
//!
//! A negamax engine for four-in-a-row on a 10x10 gravity board:
//! - Stones drop to the lowest empty row of a column
//! - Four in a row (horizontal, vertical, diagonal) wins
//! - Full board without a win is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with a 2-bit packed bitboard
//! - [`rules`]: Win detection through the last move
//! - [`search`]: Game tree nodes, negamax with alpha-beta, root parallelizer
//! - [`engine`]: Step controller picking the AI's move and belief
//! - [`game`]: Game session used by the front-end
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{AIEngine, GameState, Player, Pos, SearchConfig};
//!
//! // Human (A) opens in the middle
//! let mut state = GameState::new(Player::A);
//! state.apply_move(Pos::new(4, 0), Player::A);
//!
//! // AI responds as B
//! let engine = AIEngine::with_config(SearchConfig::default().with_depth(3).with_threads(2));
//! if let Some(ai_move) = engine.make_step(&mut state, 3).unwrap() {
//!     println!("AI plays at ({}, {}), belief {}", ai_move.pos.x, ai_move.pos.y, ai_move.belief);
//! }
//! ```
//!
//! # Scores
//!
//! Scores are exact game-theoretic values within the search horizon:
//! `+WIN_SCORE` if B wins, `-WIN_SCORE` if A wins, 0 otherwise. The search
//! is negamax, so inside it values are from the side to move.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH};
pub use config::{DepthSchedule, SearchConfig, DEFAULT_DEPTH, DEFAULT_THREADS};
pub use engine::{AIEngine, AiMove};
pub use error::{EngineError, EngineResult};
pub use game::Game;
pub use rules::{SCORE_BOUND, WIN_LENGTH, WIN_SCORE};
pub use search::{GameState, SearchStats};
