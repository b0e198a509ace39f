//! Data-driven content definitions and loaders.
//!
//! This crate houses the static werewolf content and provides loaders for
//! RON/TOML data files:
//! - Item catalog, skill tree, enemy templates and recipes (RON)
//! - Combat balance tables (TOML)
//! - Game configuration (TOML)
//!
//! Content is loaded once per process into [`game_core::ContentTables`] and
//! never appears in save records. The shipped files under `data/` are also
//! embedded in the crate; see [`ContentFactory::builtin`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EnemyLoader, GameContent, ItemLoader, LoadResult,
    RecipeLoader, SkillLoader, TablesLoader,
};
