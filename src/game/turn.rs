//! Turn sequencing: validate, apply, evaluate, advance

use tracing::{debug, info, warn};

use crate::board::{Board, Player, Pos};
use crate::error::GameError;

use super::mode::GameMode;
use super::observer::{GameObserver, Outcome};
use super::player::PlayerProfile;

/// Cached round state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of a single cell activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Occupied cell, finished round, or no mode selected. Nothing changed.
    Ignored,
    /// Mark placed; the round continues with `next` to move
    Placed { next: Player },
    /// Mark placed and the round ended
    Finished(Outcome),
}

/// Owns the board, the turn, the player profiles and the selected mode
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    board: Board,
    current: Player,
    status: GameStatus,
    players: [PlayerProfile; 2],
    /// None while the pre-game menu is showing
    mode: Option<GameMode>,
}

impl TurnCoordinator {
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            board: Board::new(),
            current: Player::PlayerOne,
            status: GameStatus::InProgress,
            players: [
                PlayerProfile::new(player_one, Player::PlayerOne),
                PlayerProfile::new(player_two, Player::PlayerTwo),
            ],
            mode: Some(GameMode::VsHuman),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    pub fn player(&self, id: Player) -> &PlayerProfile {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[PlayerProfile; 2] {
        &self.players
    }

    /// Choose a mode from the main menu and start a fresh round
    pub fn select_mode(&mut self, mode: GameMode) -> Result<(), GameError> {
        if !mode.is_supported() {
            warn!(%mode, "rejected unsupported mode");
            return Err(GameError::UnsupportedMode(mode));
        }

        info!(%mode, "mode selected");
        self.mode = Some(mode);
        self.reset();
        Ok(())
    }

    /// Handle a click on a board cell
    pub fn on_cell_activated(&mut self, pos: Pos, observer: &mut dyn GameObserver) -> MoveResult {
        if self.mode.is_none() {
            debug!(?pos, "ignored click: no mode selected");
            return MoveResult::Ignored;
        }

        if self.status.is_over() {
            debug!(?pos, status = ?self.status, "ignored click: round is over");
            return MoveResult::Ignored;
        }

        if !self.board.is_empty(pos) {
            debug!(?pos, "ignored click: cell is taken");
            return MoveResult::Ignored;
        }

        self.execute_move(pos, observer)
    }

    /// Place the current player's mark and resolve the turn
    fn execute_move(&mut self, pos: Pos, observer: &mut dyn GameObserver) -> MoveResult {
        let player = self.current;

        self.board.place(pos, player);
        debug!(?pos, %player, moves = self.board.move_count(), "mark placed");
        observer.on_move(pos, player);

        // Win first: a line completed on the ninth move is not a draw
        if let Some(winner) = self.board.check_winner() {
            self.status = GameStatus::Won(winner);
            self.players[winner.index()].record_win();
            info!(
                %winner,
                name = self.player(winner).name(),
                wins = self.player(winner).wins(),
                "round won"
            );
            observer.on_outcome(Outcome::Won(winner));
            return MoveResult::Finished(Outcome::Won(winner));
        }

        if self.board.is_draw() {
            self.status = GameStatus::Drawn;
            info!("round drawn");
            observer.on_outcome(Outcome::Draw);
            return MoveResult::Finished(Outcome::Draw);
        }

        self.current = player.opponent();
        MoveResult::Placed { next: self.current }
    }

    /// Start a new round, keeping tallies and mode
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Player::PlayerOne;
        self.status = GameStatus::InProgress;
        debug!("round reset");
    }

    /// Back to the pre-game menu: new round, zeroed tallies, no mode
    pub fn full_reset(&mut self) {
        self.reset();
        for profile in &mut self.players {
            profile.reset_wins();
        }
        self.mode = None;
        info!("full reset");
    }
}

impl Default for TurnCoordinator {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::game::observer::{GameEvent, NoopObserver};

    fn play(game: &mut TurnCoordinator, moves: &[(u8, u8)]) -> Vec<GameEvent> {
        let mut events: Vec<GameEvent> = Vec::new();
        for &(row, col) in moves {
            game.on_cell_activated(Pos::new(row, col), &mut events);
        }
        events
    }

    #[test]
    fn test_initial_state() {
        let game = TurnCoordinator::default();
        assert_eq!(game.current_player(), Player::PlayerOne);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.mode(), Some(GameMode::VsHuman));
        assert_eq!(game.board().move_count(), 0);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = TurnCoordinator::default();
        let result = game.on_cell_activated(Pos::new(1, 1), &mut NoopObserver);
        assert_eq!(result, MoveResult::Placed { next: Player::PlayerTwo });
        assert_eq!(game.board().get(Pos::new(1, 1)), Cell::PlayerOne);
        assert_eq!(game.current_player(), Player::PlayerTwo);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = TurnCoordinator::default();
        let mut events: Vec<GameEvent> = Vec::new();
        game.on_cell_activated(Pos::new(0, 0), &mut events);
        let before = game.current_player();

        let result = game.on_cell_activated(Pos::new(0, 0), &mut events);

        assert_eq!(result, MoveResult::Ignored);
        assert_eq!(game.board().get(Pos::new(0, 0)), Cell::PlayerOne);
        assert_eq!(game.current_player(), before);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_win_notifies_and_keeps_turn() {
        let mut game = TurnCoordinator::new("Alice", "Bob");
        let events = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(game.status(), GameStatus::Won(Player::PlayerOne));
        assert_eq!(game.current_player(), Player::PlayerOne);
        assert_eq!(game.player(Player::PlayerOne).wins(), 1);
        assert_eq!(game.player(Player::PlayerTwo).wins(), 0);
        assert_eq!(
            events.last(),
            Some(&GameEvent::Outcome(Outcome::Won(Player::PlayerOne)))
        );
    }

    #[test]
    fn test_clicks_after_win_are_ignored() {
        let mut game = TurnCoordinator::default();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let board = game.board().clone();

        let mut events: Vec<GameEvent> = Vec::new();
        let result = game.on_cell_activated(Pos::new(2, 2), &mut events);

        assert_eq!(result, MoveResult::Ignored);
        assert_eq!(game.board(), &board);
        assert!(events.is_empty());
    }

    #[test]
    fn test_winning_ninth_move_is_a_win() {
        // X O X
        // O X O
        // O X X   last move (2,2) completes the diagonal
        let mut game = TurnCoordinator::default();
        let events = play(
            &mut game,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(game.board().move_count(), 9);
        assert_eq!(game.status(), GameStatus::Won(Player::PlayerOne));
        let outcomes: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Outcome(_)))
            .collect();
        assert_eq!(outcomes, vec![&GameEvent::Outcome(Outcome::Won(Player::PlayerOne))]);
    }

    #[test]
    fn test_reset_keeps_tallies_and_mode() {
        let mut game = TurnCoordinator::default();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        game.reset();

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::PlayerOne);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.player(Player::PlayerOne).wins(), 1);
        assert_eq!(game.mode(), Some(GameMode::VsHuman));
    }

    #[test]
    fn test_full_reset_returns_to_menu() {
        let mut game = TurnCoordinator::default();
        play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        game.full_reset();

        assert_eq!(game.mode(), None);
        assert_eq!(game.player(Player::PlayerOne).wins(), 0);
        assert_eq!(
            game.on_cell_activated(Pos::new(0, 0), &mut NoopObserver),
            MoveResult::Ignored
        );
        assert!(game.board().is_empty(Pos::new(0, 0)));

        game.select_mode(GameMode::VsHuman).unwrap();
        assert!(matches!(
            game.on_cell_activated(Pos::new(0, 0), &mut NoopObserver),
            MoveResult::Placed { .. }
        ));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_off_board_click_panics() {
        let mut game = TurnCoordinator::default();
        game.on_cell_activated(Pos { row: 1, col: 5 }, &mut NoopObserver);
    }

    #[test]
    fn test_unsupported_modes_are_rejected() {
        let mut game = TurnCoordinator::default();
        game.full_reset();

        for mode in [GameMode::VsAi, GameMode::BestOfFive] {
            assert_eq!(game.select_mode(mode), Err(GameError::UnsupportedMode(mode)));
            assert_eq!(game.mode(), None);
        }
    }
}
