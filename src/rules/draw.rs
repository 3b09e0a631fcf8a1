//! Draw detection

use crate::board::Board;

use super::win::check_winner;

/// All cells filled and no line completed.
///
/// A completed line on the ninth move is a win, never a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
