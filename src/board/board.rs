//! Board structure: one bitboard per color on a square N x N grid

use super::bitboard::Bitboard;
use super::{Player, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;

/// Game board
///
/// The size is fixed at construction. Cells only go from empty to occupied;
/// the single way back is [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            black: Bitboard::new(cells),
            white: Bitboard::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone. Callers check emptiness first; placing `Empty` is a no-op.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Get bitboard for a player
    #[inline]
    pub fn stones_of(&self, player: Player) -> &Bitboard {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Every occupied cell with its owner, black first
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        let size = self.size;
        self.black
            .positions(size)
            .map(|p| (p, Player::Black))
            .chain(self.white.positions(size).map(|p| (p, Player::White)))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.size * self.size
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Remove every stone, keeping the size
    pub fn clear(&mut self) {
        self.black.reset();
        self.white.reset();
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(
            (pos.row as usize) < self.size && (pos.col as usize) < self.size,
            "{pos} outside {0}x{0} board",
            self.size
        );
        pos.to_index(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}
