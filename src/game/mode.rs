//! Game mode selection

/// Mode chosen from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Two humans sharing one board (hotseat)
    #[default]
    VsHuman,
    /// Human against the computer. Not supported yet.
    VsAi,
    /// Match over five rounds. Not supported yet.
    BestOfFive,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::VsHuman, GameMode::VsAi, GameMode::BestOfFive];

    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(self, GameMode::VsHuman)
    }

    /// Label shown on the main menu button
    pub fn label(self) -> &'static str {
        match self {
            GameMode::VsHuman => "Player vs Player",
            GameMode::VsAi => "Player vs AI",
            GameMode::BestOfFive => "Best of 5",
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
