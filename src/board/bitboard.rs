//! Two-bit-per-cell packed storage

use super::{Cell, Pos, TOTAL_CELLS};

const WORDS: usize = (2 * TOTAL_CELLS).div_ceil(64);

/// Packed cell storage.
/// Each cell owns the bit pair `(2i, 2i + 1)` = (owned by A, owned by B).
/// Both clear is empty, both set is undefined. Pairs never straddle a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    #[inline]
    fn locate(pos: Pos) -> (usize, usize) {
        let bit = 2 * pos.to_index();
        (bit / 64, bit % 64)
    }

    /// Overwrite the code for one cell
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        let (word, shift) = Self::locate(pos);
        let code: u64 = match cell {
            Cell::Empty => 0b00,
            Cell::PlayerA => 0b01,
            Cell::PlayerB => 0b10,
            Cell::Undefined => 0b11,
        };
        self.bits[word] = (self.bits[word] & !(0b11 << shift)) | (code << shift);
    }

    /// Decode the code for one cell
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        let (word, shift) = Self::locate(pos);
        match (self.bits[word] >> shift) & 0b11 {
            0b00 => Cell::Empty,
            0b01 => Cell::PlayerA,
            0b10 => Cell::PlayerB,
            _ => Cell::Undefined,
        }
    }

    /// Number of non-empty cells
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits
            .iter()
            .map(|&w| (w | (w >> 1)) & 0x5555_5555_5555_5555)
            .map(u64::count_ones)
            .sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }
}
