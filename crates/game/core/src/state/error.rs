//! Character model and save-record errors.

use crate::env::SkillKind;
use crate::error::{ErrorSeverity, GameError};

/// Errors returned by character operations (items, skills).
///
/// All of them leave the character unchanged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("you don't have {item}")]
    ItemNotOwned { item: String },

    #[error("{item} can't be used now")]
    ItemNotUsable { item: String },

    #[error("no skill points available")]
    NoSkillPoints,

    #[error("{skill} is already at max level {max_level}")]
    SkillMaxed { skill: SkillKind, max_level: u8 },

    #[error("{0} is not part of the skill tree")]
    UnknownSkill(SkillKind),
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        use CharacterError::*;
        match self {
            ItemNotOwned { .. } | NoSkillPoints => ErrorSeverity::Recoverable,
            ItemNotUsable { .. } | SkillMaxed { .. } | UnknownSkill(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            ItemNotOwned { .. } => "CHARACTER_ITEM_NOT_OWNED",
            ItemNotUsable { .. } => "CHARACTER_ITEM_NOT_USABLE",
            NoSkillPoints => "CHARACTER_NO_SKILL_POINTS",
            SkillMaxed { .. } => "CHARACTER_SKILL_MAXED",
            UnknownSkill(_) => "CHARACTER_UNKNOWN_SKILL",
        }
    }
}

/// Errors raised when restoring a character from a [`CharacterRecord`](super::CharacterRecord).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("unsupported save record version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("save record names unknown skill '{0}'")]
    UnknownSkill(String),

    #[error("save record has invalid level {0}")]
    InvalidLevel(u32),
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RecordError::UnsupportedVersion { .. } => "RECORD_UNSUPPORTED_VERSION",
            RecordError::UnknownSkill(_) => "RECORD_UNKNOWN_SKILL",
            RecordError::InvalidLevel(_) => "RECORD_INVALID_LEVEL",
        }
    }
}
