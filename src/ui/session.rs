//! Game flow for the Connect Four GUI

use crate::{AiMove, EngineResult, Game, Player, Pos};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info};

/// Side the human plays
pub const HUMAN: Player = Player::A;
/// Side the engine plays
pub const AI: Player = Player::B;
/// The engine's opening stone
pub const AI_OPENING: Pos = Pos { x: 4, y: 0 };

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        /// The searched game comes back with the engine's stone on it
        receiver: Receiver<EngineResult<(Game, Option<AiMove>)>>,
        start_time: Instant,
    },
}

/// Human-vs-engine session
pub struct Session {
    pub game: Game,
    pub outcome: Option<Outcome>,
    /// Engine's belief after its last move
    pub belief: i32,
    pub last_ai_move: Option<AiMove>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// New game; the engine opens at [`AI_OPENING`]
    pub fn new() -> Self {
        let mut game = Game::new(AI);
        let message = game
            .place_human_stone(AI_OPENING.x, AI_OPENING.y, AI)
            .err()
            .map(|e| e.to_string());
        Self {
            game,
            outcome: None,
            belief: 0,
            last_ai_move: None,
            ai_state: AiState::Idle,
            message,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn accepts_human_move(&self) -> bool {
        self.outcome.is_none() && !self.is_ai_thinking() && self.game.to_move() == HUMAN
    }

    /// Drop a human stone into `column` and hand the turn to the engine
    pub fn drop_human_stone(&mut self, column: u8) {
        if !self.accepts_human_move() {
            return;
        }
        let Some(row) = self.game.first_empty_row(column) else {
            self.message = Some("Column is full".to_string());
            return;
        };

        if let Err(e) = self.game.place_human_stone(column, row, HUMAN) {
            self.message = Some(e.to_string());
            return;
        }
        self.message = None;

        if self.update_outcome() {
            return;
        }
        self.start_ai_thinking();
    }

    /// Record a finished game. Returns true when the game is over.
    fn update_outcome(&mut self) -> bool {
        self.outcome = if let Some(winner) = self.game.winner() {
            Some(Outcome::Win(winner))
        } else if self.game.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        };
        if let Some(outcome) = self.outcome {
            info!(?outcome, moves = self.game.moves_played(), "game over");
        }
        self.outcome.is_some()
    }

    /// Start AI thinking on a background thread
    fn start_ai_thinking(&mut self) {
        let mut game = self.game.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = game.compute_default_ai_move().map(|m| (game, m));
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(std::sync::mpsc::TryRecvError::Empty) => return,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };
        self.ai_state = AiState::Idle;

        match result {
            Ok((game, Some(ai_move))) => {
                self.game = game;
                self.belief = ai_move.belief;
                self.last_ai_move = Some(ai_move);
                self.update_outcome();
            }
            Ok((_, None)) => {
                self.outcome = Some(Outcome::Draw);
            }
            Err(e) => {
                error!(error = %e, "AI search failed");
                self.message = Some(format!("AI error: {e}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Status line shown above the board
    pub fn belief_text(&self) -> String {
        format!("If you play optimally: {}", self.belief)
    }

    /// Result banner for a finished game
    pub fn outcome_text(&self) -> Option<String> {
        self.outcome.map(|outcome| match outcome {
            Outcome::Win(player) => format!("Player {} wins!", player.number()),
            Outcome::Draw => "It's a draw!".to_string(),
        })
    }

    /// Winning run, for highlighting
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        self.game.winning_line()
    }
}
