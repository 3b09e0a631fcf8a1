//! Round orchestration for tic-tac-toe
//!
//! [`TurnCoordinator`] sequences one move at a time (validate, apply,
//! evaluate, advance) and reports placed marks and outcomes to a
//! [`GameObserver`]. It owns the board, the player profiles and the mode
//! chosen on the main menu.

mod mode;
mod observer;
mod player;
mod turn;

pub use mode::GameMode;
pub use observer::{GameEvent, GameObserver, NoopObserver, Outcome};
pub use player::PlayerProfile;
pub use turn::{GameStatus, MoveResult, TurnCoordinator};
