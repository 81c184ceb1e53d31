//! Game session: the surface the front-end talks to
//!
//! Wraps the current [`GameState`] and the [`AIEngine`]. The front-end only
//! feeds back human moves and reads the AI's move and belief.
//!
//! # Example
//!
//! ```
//! use connect_four::{Game, Player, SearchConfig};
//!
//! let mut game = Game::with_config(Player::A, SearchConfig::default().with_depth(2));
//! let row = game.first_empty_row(4).unwrap();
//! game.place_human_stone(4, row, Player::A).unwrap();
//!
//! if let Some(ai_move) = game.compute_ai_move(2).unwrap() {
//!     println!("AI plays ({}, {})", ai_move.pos.x, ai_move.pos.y);
//! }
//! assert_eq!(game.outcome_score(), 0);
//! ```

use tracing::debug;

use crate::board::{Board, Player, Pos, BOARD_WIDTH};
use crate::config::SearchConfig;
use crate::engine::{AIEngine, AiMove};
use crate::error::{EngineError, EngineResult};
use crate::rules::winning_line;
use crate::search::GameState;

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    engine: AIEngine,
    last_move: Option<Pos>,
    moves_played: u32,
}

impl Game {
    /// Empty board with `first` to move and the default engine
    pub fn new(first: Player) -> Self {
        Self::with_config(first, SearchConfig::default())
    }

    pub fn with_config(first: Player, config: SearchConfig) -> Self {
        Self {
            state: GameState::new(first),
            engine: AIEngine::with_config(config),
            last_move: None,
            moves_played: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Lowest empty row of `column`; `None` when the column is full or off the board
    pub fn first_empty_row(&self, column: u8) -> Option<u8> {
        if (column as usize) < BOARD_WIDTH {
            self.board().first_empty_row(column)
        } else {
            None
        }
    }

    /// Put `player`'s stone at `(x, y)`.
    ///
    /// Gravity is the caller's business: use [`Game::first_empty_row`] to pick `y`.
    pub fn place_human_stone(&mut self, x: u8, y: u8, player: Player) -> EngineResult<()> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }
        if !Pos::is_valid(x as i32, y as i32) {
            return Err(EngineError::OutOfBounds {
                x: x as i32,
                y: y as i32,
            });
        }
        let pos = Pos::new(x, y);
        if !self.board().is_empty(pos) {
            return Err(EngineError::Occupied { x, y });
        }

        self.state.apply_move(pos, player);
        self.record(pos);
        debug!(?player, x, y, score = self.state.score(), "stone placed");
        Ok(())
    }

    /// Let the engine play for the player to move.
    ///
    /// `Ok(None)` means no move is available (board full). Fails with
    /// [`EngineError::GameOver`] once somebody has won.
    pub fn compute_ai_move(&mut self, depth: u8) -> EngineResult<Option<AiMove>> {
        if self.winner().is_some() {
            return Err(EngineError::GameOver);
        }
        let chosen = self.engine.make_step(&mut self.state, depth)?;
        if let Some(ai_move) = chosen {
            self.record(ai_move.pos);
        }
        Ok(chosen)
    }

    /// [`Game::compute_ai_move`] at the configured depth
    pub fn compute_default_ai_move(&mut self) -> EngineResult<Option<AiMove>> {
        let depth = self.engine.config().depth;
        self.compute_ai_move(depth)
    }

    fn record(&mut self, pos: Pos) {
        self.last_move = Some(pos);
        self.moves_played += 1;
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Score of the last move: 0 while nobody has won
    #[inline]
    pub fn outcome_score(&self) -> i32 {
        self.state.score()
    }

    /// Player who completed four in a row, if any
    pub fn winner(&self) -> Option<Player> {
        match self.outcome_score() {
            0 => None,
            s if s < 0 => Some(Player::A),
            _ => Some(Player::B),
        }
    }

    /// Stones of the winning run
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.winner()?;
        winning_line(self.board(), self.last_move?, winner)
    }

    /// Board full without a winner
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.board().is_full()
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.board().is_full()
    }
}
