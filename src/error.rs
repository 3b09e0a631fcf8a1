use crate::game::GameMode;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} mode is not supported yet")]
    UnsupportedMode(GameMode),
}
