//! Board structure over the packed cell storage

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, BOARD_HEIGHT, BOARD_WIDTH, TOTAL_CELLS};

/// Offsets of the 8 neighbours of a cell
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Game board. Plain value: copies never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Bitboard::new(),
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        let cell = self.cells.get(pos);
        debug_assert_ne!(cell, Cell::Undefined, "undefined cell code at {pos:?}");
        cell
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells.get(pos) == Cell::Empty
    }

    /// Overwrite a cell. Legal play only writes `Empty` or a player's cell.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        debug_assert_ne!(cell, Cell::Undefined, "writing undefined cell at {pos:?}");
        self.cells.set(pos, cell);
    }

    /// Place a player's stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.set(pos, player.cell());
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells.set(pos, Cell::Empty);
    }

    /// Lowest empty row of a column, `None` when the column is full
    #[inline]
    pub fn first_empty_row(&self, x: u8) -> Option<u8> {
        (0..BOARD_HEIGHT as u8).find(|&y| self.is_empty(Pos::new(x, y)))
    }

    /// Number of occupied cells among the 8 neighbours of `pos`
    #[inline]
    pub fn occupied_neighbours(&self, pos: Pos) -> usize {
        NEIGHBOURS
            .iter()
            .filter_map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| !self.is_empty(p))
            .count()
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.cells.count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over every position, column by column
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..BOARD_WIDTH as u8).flat_map(|x| (0..BOARD_HEIGHT as u8).map(move |y| Pos::new(x, y)))
    }
}
