//! Error type for level building, asset lookup and screen selection.

use crate::animation::AnimState;
use crate::state::GameState;

/// Setup-time failures. All of them are content or programming mistakes, so callers report
/// them and stop instead of retrying.
#[derive(Debug)]
pub enum GameError {
    /// An asset key that the lookup table does not know.
    UnknownAsset(String),
    /// The end-screen renderer was handed a state that has no end screen.
    NotAnEndScreen(GameState),
    /// A mandatory frame sequence came in empty.
    EmptyFrames(AnimState),
    /// The embedded level description could not be parsed.
    LevelParse(ron::error::SpannedError),
}

impl From<ron::error::SpannedError> for GameError {
    fn from(e: ron::error::SpannedError) -> Self {
        GameError::LevelParse(e)
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::UnknownAsset(key) => write!(f, "unknown asset key '{}'", key),
            GameError::NotAnEndScreen(state) => {
                write!(f, "no end screen exists for game state {:?}", state)
            }
            GameError::EmptyFrames(state) => {
                write!(f, "frame sequence for {:?} must not be empty", state)
            }
            GameError::LevelParse(e) => write!(f, "level parse error: {}", e),
        }
    }
}

impl std::error::Error for GameError {}
