//! Reference table validation errors.

use crate::env::SkillKind;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while assembling [`ContentTables`](super::ContentTables).
///
/// Reference data is loaded once at startup; any of these means the data files
/// are inconsistent and the game cannot start.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TablesError {
    #[error("item '{0}' is defined more than once")]
    DuplicateItem(String),

    #[error("skill '{0}' is defined more than once")]
    DuplicateSkill(SkillKind),

    #[error("enemy '{0}' is defined more than once")]
    DuplicateEnemy(String),

    #[error("recipe for '{0}' is defined more than once")]
    DuplicateRecipe(String),

    #[error("recipe output '{0}' is not a known item")]
    UnknownRecipeOutput(String),

    #[error("recipe for '{recipe}' requires unknown item '{ingredient}'")]
    UnknownIngredient { recipe: String, ingredient: String },

    #[error("recipe for '{0}' has no ingredients")]
    EmptyRecipe(String),

    #[error("enemy '{0}' has no attacks")]
    EnemyWithoutAttacks(String),

    #[error("enemy '{name}' has non-positive health {health}")]
    InvalidEnemyHealth { name: String, health: i32 },
}

impl GameError for TablesError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use TablesError::*;
        match self {
            DuplicateItem(_) => "TABLES_DUPLICATE_ITEM",
            DuplicateSkill(_) => "TABLES_DUPLICATE_SKILL",
            DuplicateEnemy(_) => "TABLES_DUPLICATE_ENEMY",
            DuplicateRecipe(_) => "TABLES_DUPLICATE_RECIPE",
            UnknownRecipeOutput(_) => "TABLES_UNKNOWN_RECIPE_OUTPUT",
            UnknownIngredient { .. } => "TABLES_UNKNOWN_INGREDIENT",
            EmptyRecipe(_) => "TABLES_EMPTY_RECIPE",
            EnemyWithoutAttacks(_) => "TABLES_ENEMY_WITHOUT_ATTACKS",
            InvalidEnemyHealth { .. } => "TABLES_INVALID_ENEMY_HEALTH",
        }
    }
}
