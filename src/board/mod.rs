//! Board representation for Connect Four

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board width (columns)
pub const BOARD_WIDTH: usize = 10;
/// Board height (rows)
pub const BOARD_HEIGHT: usize = 10;
pub const TOTAL_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT; // 100

/// Contents of a single cell, as stored in the 2-bit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
    /// Encodable but never produced by legal play
    Undefined,
}

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Human side in the default setup, scores negative
    A,
    /// AI side in the default setup, scores positive
    B,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Cell value this player's stones are stored as
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::A => Cell::PlayerA,
            Player::B => Cell::PlayerB,
        }
    }

    /// Sign of this player's win score, also the negamax color when this player is to move
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::A => -1,
            Player::B => 1,
        }
    }

    /// 1-based number used in status messages
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::A => 1,
            Player::B => 2,
        }
    }
}

/// Position on the board. `x` is the column, `y` the row counted from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!((x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT);
        Self { x, y }
    }

    /// Column-major cell index
    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_HEIGHT + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx / BOARD_HEIGHT) as u8,
            y: (idx % BOARD_HEIGHT) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_WIDTH as i32 && y >= 0 && y < BOARD_HEIGHT as i32
    }

    /// Offset this position, returning `None` when it leaves the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Pos> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        if Pos::is_valid(x, y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}
