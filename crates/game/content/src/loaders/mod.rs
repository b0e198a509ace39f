//! Content loaders for reading game data from files.
//!
//! Every loader exposes `load(path)` for data directories and `parse(text)`
//! for content embedded in the binary. RON holds the entity catalogs, TOML the
//! numeric rules.

pub mod config;
pub mod enemy;
pub mod factory;
pub mod item;
pub mod recipe;
pub mod skill;
pub mod tables;

pub use config::ConfigLoader;
pub use enemy::EnemyLoader;
pub use factory::{ContentFactory, GameContent};
pub use item::ItemLoader;
pub use recipe::RecipeLoader;
pub use skill::SkillLoader;
pub use tables::TablesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
