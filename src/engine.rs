//! Step controller: picks and plays the AI's move
//!
//! The engine runs one or more root passes (see [`DepthSchedule`]) and reports
//! the chosen move together with a *belief*: the value of the pass run at the
//! requested depth, from the AI's point of view. `WIN_SCORE` means the AI can
//! force a win within that horizon, `-WIN_SCORE` means optimal play beats it.
//!
//! # Example
//!
//! ```
//! use connect_four::{AIEngine, GameState, Player, Pos, SearchConfig};
//!
//! let mut state = GameState::new(Player::A);
//! state.apply_move(Pos::new(4, 0), Player::A);
//!
//! let engine = AIEngine::with_config(SearchConfig::default().with_depth(3));
//! let ai_move = engine.make_step(&mut state, 3).unwrap().expect("board has room");
//! assert_eq!(state.board().stone_count(), 2);
//! println!("AI plays ({}, {}), belief {}", ai_move.pos.x, ai_move.pos.y, ai_move.belief);
//! ```

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::board::Pos;
use crate::config::{DepthSchedule, SearchConfig};
use crate::error::{EngineError, EngineResult};
use crate::rules::WIN_SCORE;
use crate::search::{order_successors, search_root, GameState, PassResult, SearchStats};

/// Move chosen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub pos: Pos,
    /// Value of the pass at the requested depth, for the side that moved
    pub belief: i32,
    /// Depth of the pass whose move was played
    pub depth: u8,
    /// Root passes run
    pub passes: usize,
    /// Totals over all passes
    pub stats: SearchStats,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Main AI engine.
#[derive(Debug, Clone, Default)]
pub struct AIEngine {
    config: SearchConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose a move for the player to move in `state` without playing it.
    ///
    /// Returns `Ok(None)` when the board is full.
    pub fn choose_move(&self, state: &GameState, depth: u8) -> EngineResult<Option<AiMove>> {
        if depth == 0 {
            return Err(EngineError::InvalidDepth { depth });
        }

        let start = Instant::now();
        let mut children = state.successors();
        order_successors(&mut children, self.config.trim);
        if children.is_empty() {
            info!("no move available");
            return Ok(None);
        }

        let depths: Vec<u8> = match self.config.schedule {
            DepthSchedule::FullDepth => vec![depth],
            DepthSchedule::IterativeDeepening => (1..=depth).collect(),
        };

        let mut passes: Vec<PassResult> = Vec::with_capacity(depths.len());
        for d in depths {
            let pass = search_root(&children, d, self.config.threads, self.config.trim)?;
            let Some(pass) = pass else {
                return Ok(None);
            };
            passes.push(pass);

            // A forced win seen shallow stays forced deeper; take the quickest one
            if pass.value == WIN_SCORE && self.config.trim.is_none() {
                debug!(depth = d, "forced win found, stopping early");
                break;
            }
        }

        let Some(&last) = passes.last() else {
            return Ok(None);
        };
        let belief = last.value;
        let chosen = if last.value == -WIN_SCORE {
            match passes.iter().rev().find(|p| p.value != -WIN_SCORE) {
                Some(&survivor) => {
                    warn!(
                        lost_at = last.depth,
                        fallback = survivor.depth,
                        "forced loss, playing the longest-surviving move"
                    );
                    survivor
                }
                None => last,
            }
        } else {
            last
        };

        let mut stats = SearchStats::default();
        for pass in &passes {
            stats.merge(&pass.stats);
        }

        let ai_move = AiMove {
            pos: chosen.pos,
            belief,
            depth: chosen.depth,
            passes: passes.len(),
            stats,
            time_ms: start.elapsed().as_millis() as u64,
        };
        info!(
            player = ?state.to_move(),
            x = ai_move.pos.x,
            y = ai_move.pos.y,
            belief,
            depth = ai_move.depth,
            nodes = stats.nodes,
            time_ms = ai_move.time_ms,
            "AI move chosen"
        );
        Ok(Some(ai_move))
    }

    /// Choose a move for the player to move and play it on `state`.
    pub fn make_step(&self, state: &mut GameState, depth: u8) -> EngineResult<Option<AiMove>> {
        let chosen = self.choose_move(state, depth)?;
        if let Some(ai_move) = chosen {
            state.apply_move(ai_move.pos, state.to_move());
        }
        Ok(chosen)
    }

    /// [`AIEngine::make_step`] at the configured depth
    pub fn make_default_step(&self, state: &mut GameState) -> EngineResult<Option<AiMove>> {
        self.make_step(state, self.config.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player, BOARD_HEIGHT, BOARD_WIDTH};

    fn state_with(to_move: Player, a: &[(u8, u8)], b: &[(u8, u8)]) -> GameState {
        let mut board = Board::new();
        for &(x, y) in a {
            board.place_stone(Pos::new(x, y), Player::A);
        }
        for &(x, y) in b {
            board.place_stone(Pos::new(x, y), Player::B);
        }
        GameState::from_board(board, to_move)
    }

    fn engine(schedule: DepthSchedule) -> AIEngine {
        AIEngine::with_config(SearchConfig::default().with_schedule(schedule))
    }

    /// Full board without any four in a row: owner flips every row and every
    /// second column, so no line holds more than two equal stones in a row.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for pos in Board::positions() {
            let player = if (pos.x / 2 + pos.y) % 2 == 0 { Player::A } else { Player::B };
            board.place_stone(pos, player);
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.config().depth, 5);
        assert_eq!(engine.config().threads, 8);
        assert_eq!(engine.config().trim, None);
        assert_eq!(engine.config().schedule, DepthSchedule::IterativeDeepening);
    }

    #[test]
    fn test_rejects_zero_depth() {
        let state = GameState::new(Player::B);
        assert_eq!(
            AIEngine::new().choose_move(&state, 0),
            Err(EngineError::InvalidDepth { depth: 0 })
        );
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = drawn_board();
        for pos in Board::positions() {
            let owner = if board.get(pos) == Player::A.cell() { Player::A } else { Player::B };
            let mut without = board;
            without.remove_stone(pos);
            assert_eq!(crate::rules::check_outcome(&without, pos, owner), 0);
        }

        let mut state = GameState::from_board(board, Player::B);
        let before = state;
        for schedule in [DepthSchedule::FullDepth, DepthSchedule::IterativeDeepening] {
            assert_eq!(engine(schedule).make_step(&mut state, 5), Ok(None));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let state = state_with(Player::B, &[(0, 0), (0, 1), (1, 0)], &[(6, 0), (7, 0), (8, 0)]);
        for schedule in [DepthSchedule::FullDepth, DepthSchedule::IterativeDeepening] {
            let ai_move = engine(schedule).choose_move(&state, 1).unwrap().unwrap();
            assert!(ai_move.pos == Pos::new(5, 0) || ai_move.pos == Pos::new(9, 0));
            assert_eq!(ai_move.belief, WIN_SCORE);
        }
    }

    #[test]
    fn test_takes_immediate_win_as_player_a() {
        let state = state_with(Player::A, &[(3, 0), (3, 1), (3, 2)], &[(4, 0), (5, 0), (4, 1)]);
        let ai_move = AIEngine::new().choose_move(&state, 1).unwrap().unwrap();
        assert_eq!(ai_move.pos, Pos::new(3, 3));
        assert_eq!(ai_move.belief, WIN_SCORE);
    }

    #[test]
    fn test_prefers_win_over_block_at_depth() {
        // Both sides threaten. Blocking at (3,0) still wins later, and scores
        // carry no distance, so only the iterative schedule is sure to win now.
        let state = state_with(Player::B, &[(0, 0), (1, 0), (2, 0)], &[(6, 0), (7, 0), (8, 0)]);

        let full = engine(DepthSchedule::FullDepth).choose_move(&state, 4).unwrap().unwrap();
        assert_eq!(full.belief, WIN_SCORE);

        let iterative = engine(DepthSchedule::IterativeDeepening)
            .choose_move(&state, 4)
            .unwrap()
            .unwrap();
        assert_eq!(iterative.pos, Pos::new(5, 0));
        assert_eq!(iterative.passes, 1);
        assert_eq!(iterative.belief, WIN_SCORE);
    }

    #[test]
    fn test_blocks_open_end_of_three() {
        let state = state_with(Player::B, &[(2, 0), (3, 0), (4, 0)], &[(5, 0), (9, 0), (9, 1)]);
        for schedule in [DepthSchedule::FullDepth, DepthSchedule::IterativeDeepening] {
            for depth in 2..=3 {
                let ai_move = engine(schedule).choose_move(&state, depth).unwrap().unwrap();
                assert_eq!(ai_move.pos, Pos::new(1, 0), "{schedule:?} depth {depth}");
                assert_eq!(ai_move.belief, 0);
            }
        }
    }

    #[test]
    fn test_forced_loss_falls_back_to_surviving_pass() {
        // Open three for A: one block still leaves the other end
        let state = state_with(Player::B, &[(2, 0), (3, 0), (4, 0)], &[(8, 0), (9, 0)]);

        let full = engine(DepthSchedule::FullDepth).choose_move(&state, 2).unwrap().unwrap();
        assert_eq!(full.belief, -WIN_SCORE);
        assert_eq!(full.passes, 1);

        let iterative = engine(DepthSchedule::IterativeDeepening)
            .choose_move(&state, 2)
            .unwrap()
            .unwrap();
        assert_eq!(iterative.belief, -WIN_SCORE);
        assert_eq!(iterative.passes, 2);
        assert_eq!(iterative.depth, 1);

        let mut children = state.successors();
        order_successors(&mut children, None);
        let shallow = search_root(&children, 1, 8, None).unwrap().unwrap();
        assert_eq!(iterative.pos, shallow.pos);
    }

    #[test]
    fn test_belief_comes_from_requested_depth() {
        let state = state_with(Player::B, &[(2, 0), (3, 0), (4, 0)], &[(8, 0), (9, 0)]);
        // Depth 1 sees nothing, depth 2 sees the loss
        let ai_move = AIEngine::new().choose_move(&state, 2).unwrap().unwrap();
        assert_eq!(ai_move.belief, -WIN_SCORE);
        let shallow = AIEngine::new().choose_move(&state, 1).unwrap().unwrap();
        assert_eq!(shallow.belief, 0);
    }

    #[test]
    fn test_make_step_places_exactly_one_stone() {
        let mut state = GameState::new(Player::A);
        state.apply_move(Pos::new(4, 0), Player::A);
        let before = *state.board();

        let engine = AIEngine::with_config(SearchConfig::default().with_depth(3));
        let ai_move = engine.make_default_step(&mut state).unwrap().unwrap();

        assert_eq!(state.board().stone_count(), before.stone_count() + 1);
        assert_eq!(state.board().get(ai_move.pos), Player::B.cell());
        assert_eq!(state.last_move(), ai_move.pos);
        assert_eq!(state.to_move(), Player::A);
        assert_eq!(before.first_empty_row(ai_move.pos.x), Some(ai_move.pos.y));
    }

    #[test]
    fn test_schedules_agree_on_quiet_position() {
        let state = state_with(Player::B, &[(4, 0), (3, 0)], &[(4, 1), (5, 0)]);
        let full = engine(DepthSchedule::FullDepth).choose_move(&state, 3).unwrap().unwrap();
        let iterative = engine(DepthSchedule::IterativeDeepening)
            .choose_move(&state, 3)
            .unwrap()
            .unwrap();
        assert_eq!(full.belief, iterative.belief);
        if full.belief != -WIN_SCORE && full.belief != WIN_SCORE {
            assert_eq!(full.pos, iterative.pos);
        }
    }

    #[test]
    fn test_trimmed_search_still_moves() {
        let state = state_with(Player::B, &[(4, 0)], &[]);
        let engine = AIEngine::with_config(SearchConfig::default().with_trim(Some(3)));
        let ai_move = engine.choose_move(&state, 4).unwrap().unwrap();
        assert!((ai_move.pos.x as usize) < BOARD_WIDTH);
        assert!((ai_move.pos.y as usize) < BOARD_HEIGHT);
    }

    #[test]
    fn test_single_thread_matches_default() {
        let state = state_with(Player::A, &[(4, 0), (3, 0)], &[(4, 1), (5, 0), (2, 0)]);
        let single = AIEngine::with_config(SearchConfig::default().with_threads(1))
            .choose_move(&state, 4)
            .unwrap()
            .unwrap();
        let multi = AIEngine::new().choose_move(&state, 4).unwrap().unwrap();
        assert_eq!((single.pos, single.belief), (multi.pos, multi.belief));
    }
}
