//! Search node: a board plus the bookkeeping needed to score it
//!
//! Every node owns its own board snapshot. Children are produced by copying the
//! parent and applying exactly one move, so no two paths of the search share
//! mutable state.

use crate::board::{Board, Player, Pos, BOARD_WIDTH};
use crate::rules::check_outcome;

/// Position in the game tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    last_move: Pos,
    to_move: Player,
    /// Win score of the last move, 0 if it did not win
    points: i32,
}

impl GameState {
    /// Empty board with `first` to move
    pub fn new(first: Player) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Wrap an arbitrary board. The last move is unknown, so the score starts at 0.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            last_move: Pos::default(),
            to_move,
            points: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn last_move(&self) -> Pos {
        self.last_move
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cached outcome of the last move: 0, or the winner's sign times the win score
    #[inline]
    pub fn score(&self) -> i32 {
        self.points
    }

    /// `player` puts a stone at `pos`. The caller guarantees the cell is empty.
    pub fn apply_move(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.board.is_empty(pos), "move onto occupied cell {pos:?}");
        self.points = check_outcome(&self.board, pos, player);
        self.board.place_stone(pos, player);
        self.last_move = pos;
        self.to_move = player.opponent();
    }

    /// One child per non-full column, in column order, each dropping a stone
    /// for the player to move into the lowest empty row.
    pub fn successors(&self) -> Vec<GameState> {
        let mut children = Vec::with_capacity(BOARD_WIDTH);
        for x in 0..BOARD_WIDTH as u8 {
            if let Some(y) = self.board.first_empty_row(x) {
                let mut child = *self;
                child.apply_move(Pos::new(x, y), self.to_move);
                children.push(child);
            }
        }
        children
    }

    /// Occupied cells around the last move
    #[inline]
    pub fn surround_count(&self) -> usize {
        self.board.occupied_neighbours(self.last_move)
    }
}

/// Sort children so moves next to many stones come first.
///
/// The sort is stable, so equal counts keep column order. `trim` truncates the
/// ordered list; `None` keeps every child.
pub fn order_successors(children: &mut Vec<GameState>, trim: Option<usize>) {
    children.sort_by_key(|child| std::cmp::Reverse(child.surround_count()));
    if let Some(width) = trim {
        children.truncate(width);
    }
}
