//! Flat 3x3 board with move counting

use super::{Cell, Player, Pos, TOTAL_CELLS};

/// Game board, stored row-major (index = row * 3 + col)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
    /// Number of marks placed since the last reset (0-9)
    moves: u8,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; TOTAL_CELLS],
            moves: 0,
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a mark for `player`.
    ///
    /// The caller must check [`Board::is_empty`] first; placing onto an
    /// occupied cell is a contract violation.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos), "cell {:?} is already taken", pos);
        self.cells[pos.to_index()] = Cell::from(player);
        self.moves += 1;
    }

    /// Clear every cell and the move count
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; TOTAL_CELLS];
        self.moves = 0;
    }

    /// Marks placed so far
    #[inline]
    pub fn move_count(&self) -> u8 {
        self.moves
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.moves as usize >= TOTAL_CELLS
    }

    /// Winner by completed line, if any
    pub fn check_winner(&self) -> Option<Player> {
        crate::rules::check_winner(self)
    }

    /// Board full with no completed line
    pub fn is_draw(&self) -> bool {
        crate::rules::is_draw(self)
    }

    /// Iterate cells with their positions in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (Pos::from_index(idx), cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
