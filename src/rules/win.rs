//! Win condition checking for Connect Four
//!
//! A move wins when it completes a run of [`WIN_LENGTH`] stones of the mover
//! through the cell just played. Only the last move is ever inspected; there is
//! no whole-board scan.

use crate::board::{Board, Player, Pos};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// Magnitude of a win score. Player A wins score negative, player B positive.
pub const WIN_SCORE: i32 = 1;

/// Bound strictly above any score the search can produce
pub const SCORE_BOUND: i32 = 5;

/// Axis vectors in check order: horizontal, vertical, main diagonal, anti-diagonal
const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Count `player`'s contiguous stones from `pos` (exclusive) along `(dx, dy)`,
/// stopping once `limit` is reached.
#[inline]
fn run_length(board: &Board, pos: Pos, dx: i32, dy: i32, player: Player, limit: usize) -> usize {
    let mut count = 0;
    let mut cur = pos;
    while count < limit {
        match cur.offset(dx, dy) {
            Some(next) if board.get(next) == player.cell() => {
                count += 1;
                cur = next;
            }
            _ => break,
        }
    }
    count
}

/// Score of `player` playing at `pos`.
///
/// `board` is the board before the stone is placed (the played cell counts as
/// one stone either way). Returns `player.sign() * WIN_SCORE` if the move
/// completes a run of [`WIN_LENGTH`], otherwise 0.
pub fn check_outcome(board: &Board, pos: Pos, player: Player) -> i32 {
    for (dx, dy) in AXES {
        let mut sum = 1;
        sum += run_length(board, pos, -dx, -dy, player, WIN_LENGTH - sum);
        if sum < WIN_LENGTH {
            sum += run_length(board, pos, dx, dy, player, WIN_LENGTH - sum);
        }
        if sum >= WIN_LENGTH {
            return player.sign() * WIN_SCORE;
        }
    }
    0
}

/// Full run of `player`'s stones through `pos` if it is at least [`WIN_LENGTH`] long.
///
/// Used to highlight a finished game. Stones are ordered along the axis.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for (dx, dy) in AXES {
        let mut line = vec![pos];

        let mut cur = pos;
        while let Some(prev) = cur.offset(-dx, -dy) {
            if board.get(prev) != player.cell() {
                break;
            }
            line.insert(0, prev);
            cur = prev;
        }

        cur = pos;
        while let Some(next) = cur.offset(dx, dy) {
            if board.get(next) != player.cell() {
                break;
            }
            line.push(next);
            cur = next;
        }

        if line.len() >= WIN_LENGTH {
            return Some(line);
        }
    }
    None
}
