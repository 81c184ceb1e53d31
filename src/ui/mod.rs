//! GUI module for the Connect Four game
//!
//! This module provides a native Rust GUI using egui/eframe. It only talks to
//! the engine through [`crate::Game`].

mod app;
mod board_view;
mod session;
mod theme;

pub use app::ConnectFourApp;
pub use session::{Outcome, Session, AI, AI_OPENING, HUMAN};
