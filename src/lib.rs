//! Tic-tac-toe for two players on one screen
//!
//! - 3x3 board, players alternate starting with player one
//! - Three identical marks in a row, column or diagonal win
//! - Nine marks without a line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Flat 9-cell board representation
//! - [`rules`]: Win and draw detection
//! - [`game`]: Turn coordinator, player profiles, mode selection
//! - [`config`]: TOML configuration
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::game::{MoveResult, NoopObserver, Outcome, TurnCoordinator};
//! use tictactoe::{Player, Pos};
//!
//! let mut game = TurnCoordinator::new("Alice", "Bob");
//! let mut result = MoveResult::Ignored;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     result = game.on_cell_activated(Pos::new(row, col), &mut NoopObserver);
//! }
//!
//! assert_eq!(result, MoveResult::Finished(Outcome::Won(Player::PlayerOne)));
//! assert_eq!(game.player(Player::PlayerOne).wins(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use error::GameError;
