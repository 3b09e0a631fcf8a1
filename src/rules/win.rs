//! Win condition checking
//!
//! Lines are evaluated in a fixed order: rows top to bottom, columns left to
//! right, then the main diagonal and the anti-diagonal. Only one player can
//! complete a line first, so the order only matters for determinism.

use crate::board::{Board, Player, Pos};

/// Flat indices of every line, in evaluation order
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of a line if all three cells share the same mark
#[inline]
fn line_owner(board: &Board, line: [usize; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|idx| board.get(Pos::from_index(idx)));
    if a == b && a == c {
        a.player()
    } else {
        None
    }
}

/// Check for a winner
///
/// Returns the player occupying the first completed line, None otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Find the positions of the first completed line, if any
pub fn find_winning_line(board: &Board) -> Option<[Pos; 3]> {
    LINES
        .iter()
        .find(|&&line| line_owner(board, line).is_some())
        .map(|&line| line.map(Pos::from_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(u8, u8, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in moves {
            board.place(Pos::new(row, col), player);
        }
        board
    }

    #[test]
    fn test_no_winner() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_every_row() {
        for row in 0..3 {
            let board = board_with(&[
                (row, 0, Player::PlayerTwo),
                (row, 1, Player::PlayerTwo),
                (row, 2, Player::PlayerTwo),
            ]);
            assert_eq!(check_winner(&board), Some(Player::PlayerTwo));
        }
    }

    #[test]
    fn test_every_column() {
        for col in 0..3 {
            let board = board_with(&[
                (0, col, Player::PlayerOne),
                (1, col, Player::PlayerOne),
                (2, col, Player::PlayerOne),
            ]);
            assert_eq!(check_winner(&board), Some(Player::PlayerOne));
            assert_eq!(
                find_winning_line(&board),
                Some([Pos::new(0, col), Pos::new(1, col), Pos::new(2, col)])
            );
        }
    }

    #[test]
    fn test_main_diagonal() {
        let board = board_with(&[
            (0, 0, Player::PlayerOne),
            (1, 1, Player::PlayerOne),
            (2, 2, Player::PlayerOne),
        ]);
        assert_eq!(check_winner(&board), Some(Player::PlayerOne));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[
            (0, 2, Player::PlayerTwo),
            (1, 1, Player::PlayerTwo),
            (2, 0, Player::PlayerTwo),
        ]);
        assert_eq!(check_winner(&board), Some(Player::PlayerTwo));
        assert_eq!(
            find_winning_line(&board),
            Some([Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (0, 0, Player::PlayerOne),
            (0, 1, Player::PlayerTwo),
            (0, 2, Player::PlayerOne),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_two_marks_per_line_is_not_a_win() {
        // X X .
        // O O .
        // X . O
        let board = board_with(&[
            (0, 0, Player::PlayerOne),
            (1, 0, Player::PlayerTwo),
            (0, 1, Player::PlayerOne),
            (1, 1, Player::PlayerTwo),
            (2, 0, Player::PlayerOne),
            (2, 2, Player::PlayerTwo),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_order() {
        // X X X
        // O O X
        // O . X   row 0 and column 2 both complete
        let board = board_with(&[
            (0, 0, Player::PlayerOne),
            (0, 1, Player::PlayerOne),
            (0, 2, Player::PlayerOne),
            (1, 2, Player::PlayerOne),
            (2, 2, Player::PlayerOne),
            (1, 0, Player::PlayerTwo),
            (1, 1, Player::PlayerTwo),
            (2, 0, Player::PlayerTwo),
        ]);
        assert_eq!(check_winner(&board), Some(Player::PlayerOne));
        assert_eq!(
            find_winning_line(&board),
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
    }
}
