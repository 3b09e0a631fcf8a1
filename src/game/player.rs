//! Player profiles and win tallies

use crate::board::Player;

/// A seat at the table: display name plus a running win count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    name: String,
    id: Player,
    automated: bool,
    wins: u32,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, id: Player) -> Self {
        Self {
            name: name.into(),
            id,
            // Automated play is not implemented
            automated: false,
            wins: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Player {
        self.id
    }

    pub fn is_automated(&self) -> bool {
        self.automated
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn reset_wins(&mut self) {
        self.wins = 0;
    }
}
