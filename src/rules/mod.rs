//! Game rules for tic-tac-toe
//!
//! - Win: three identical marks in a row, column or diagonal
//! - Draw: all nine cells filled without a completed line

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, find_winning_line, LINES};
