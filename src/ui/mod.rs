//! GUI module for the tic-tac-toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It is the
//! presentation layer: it draws marks and menus and forwards cell clicks to
//! the [`TurnCoordinator`](crate::game::TurnCoordinator).

mod app;
mod board_view;
mod menu;
mod theme;

pub use app::TicTacToeApp;
pub use menu::{MenuState, Screen};
