//! Screen and banner state driven by coordinator notifications

use tracing::debug;

use crate::game::{GameObserver, Outcome};
use crate::{Player, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Mode buttons; the board is hidden
    #[default]
    MainMenu,
    Playing,
}

/// What the menus currently show
#[derive(Debug, Default)]
pub struct MenuState {
    pub screen: Screen,
    /// End-of-round banner
    pub banner: Option<Outcome>,
    pub last_move: Option<Pos>,
    /// Message shown on the main menu (unsupported mode)
    pub notice: Option<String>,
}

impl MenuState {
    pub fn enter_game(&mut self) {
        self.screen = Screen::Playing;
        self.banner = None;
        self.last_move = None;
        self.notice = None;
    }

    /// Hide the banner and clear the board markers for another round
    pub fn play_again(&mut self) {
        self.banner = None;
        self.last_move = None;
    }

    pub fn main_menu(&mut self) {
        *self = Self::default();
    }
}

impl GameObserver for MenuState {
    fn on_move(&mut self, pos: Pos, player: Player) {
        debug!(?pos, %player, "render mark");
        self.last_move = Some(pos);
    }

    fn on_outcome(&mut self, outcome: Outcome) {
        debug!(?outcome, "show banner");
        self.banner = Some(outcome);
    }
}
