//! Crafting recipe loader.

use std::path::Path;

use game_core::Recipe;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Recipe book structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBook {
    pub recipes: Vec<Recipe>,
}

/// Loader for crafting recipes from RON files.
pub struct RecipeLoader;

impl RecipeLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Recipe>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Recipe>> {
        let book: RecipeBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse recipe book RON: {}", e))?;

        Ok(book.recipes)
    }
}
