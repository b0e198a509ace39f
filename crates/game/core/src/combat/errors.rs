//! Combat engine errors.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    #[error("no enemy named {0} found")]
    UnknownEnemyType(String),

    #[error("invalid attack choice '{0}'")]
    InvalidActionSelector(String),

    #[error("the encounter is already over")]
    EncounterFinished,

    #[error("you slip away from the fight in round {round}")]
    Abandoned { round: u32 },
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CombatError::UnknownEnemyType(_) => ErrorSeverity::Validation,
            CombatError::InvalidActionSelector(_) => ErrorSeverity::Recoverable,
            CombatError::EncounterFinished => ErrorSeverity::Internal,
            CombatError::Abandoned { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::UnknownEnemyType(_) => "COMBAT_UNKNOWN_ENEMY_TYPE",
            CombatError::InvalidActionSelector(_) => "COMBAT_INVALID_ACTION_SELECTOR",
            CombatError::EncounterFinished => "COMBAT_ENCOUNTER_FINISHED",
            CombatError::Abandoned { .. } => "COMBAT_ABANDONED",
        }
    }
}
