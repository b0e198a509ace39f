//! Crafting resolver.
//!
//! A craft either fully succeeds (one instance of every listed ingredient
//! removed, output appended) or fails leaving the inventory untouched.

use crate::env::ContentTables;
use crate::error::{ErrorSeverity, GameError};
use crate::state::Inventory;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CraftError {
    #[error("no recipe produces '{0}'")]
    UnknownRecipe(String),

    #[error("you lack the following ingredients: {}", missing.join(", "))]
    MissingIngredients { recipe: String, missing: Vec<String> },
}

impl GameError for CraftError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CraftError::UnknownRecipe(_) => ErrorSeverity::Validation,
            CraftError::MissingIngredients { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CraftError::UnknownRecipe(_) => "CRAFT_UNKNOWN_RECIPE",
            CraftError::MissingIngredients { .. } => "CRAFT_MISSING_INGREDIENTS",
        }
    }
}

/// Successful craft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crafted {
    pub output: String,
    pub consumed: Vec<String>,
}

/// Crafts the item named `recipe` from `inventory`.
///
/// Every missing ingredient instance is reported together; nothing is
/// consumed unless all of them are present.
pub fn craft(
    recipe: &str,
    inventory: &mut Inventory,
    tables: &ContentTables,
) -> Result<Crafted, CraftError> {
    let definition = tables
        .recipe(recipe)
        .ok_or_else(|| CraftError::UnknownRecipe(recipe.to_string()))?;

    let missing = inventory.missing(&definition.ingredients);
    if !missing.is_empty() {
        return Err(CraftError::MissingIngredients {
            recipe: definition.output.clone(),
            missing: missing.into_iter().map(str::to_string).collect(),
        });
    }

    for ingredient in &definition.ingredients {
        inventory.remove_one(ingredient);
    }
    inventory.push(definition.output.clone());

    Ok(Crafted {
        output: definition.output.clone(),
        consumed: definition.ingredients.clone(),
    })
}
