//! Notifications from the turn coordinator to the presentation layer

use crate::board::{Player, Pos};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Player),
    Draw,
}

/// Receiver of the two side effects a move can produce.
///
/// The coordinator never renders anything itself; it reports placed marks and
/// round outcomes here.
pub trait GameObserver {
    /// A mark was placed for `player` at `pos`
    fn on_move(&mut self, pos: Pos, player: Player);

    /// The round ended
    fn on_outcome(&mut self, outcome: Outcome);
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {
    fn on_move(&mut self, _pos: Pos, _player: Player) {}

    fn on_outcome(&mut self, _outcome: Outcome) {}
}

/// Recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Move { pos: Pos, player: Player },
    Outcome(Outcome),
}

impl GameObserver for Vec<GameEvent> {
    fn on_move(&mut self, pos: Pos, player: Player) {
        self.push(GameEvent::Move { pos, player });
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        self.push(GameEvent::Outcome(outcome));
    }
}
