//! Unified error type surfaced by the runtime API.
//!
//! Wraps rule failures from `game-core` and repository failures so the client
//! can report them with consistent context.

use game_core::{
    CharacterError, CombatError, CraftError, ErrorSeverity, GameError, RecordError,
};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Craft(#[from] CraftError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("save record rejected: {0}")]
    Record(#[from] RecordError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("the session is over")]
    SessionOver,
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Character(e) => e.severity(),
            RuntimeError::Craft(e) => e.severity(),
            RuntimeError::Combat(e) => e.severity(),
            RuntimeError::Record(e) => e.severity(),
            RuntimeError::Repository(_) => ErrorSeverity::Internal,
            RuntimeError::SessionOver => ErrorSeverity::Fatal,
        }
    }

    /// True for failures the player can shrug off and keep playing.
    pub fn is_recoverable(&self) -> bool {
        self.severity().is_recoverable()
    }
}
