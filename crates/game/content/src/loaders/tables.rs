//! Combat balance tables loader.

use std::path::Path;

use game_core::CombatTables;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat balance tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load combat tables from a TOML file.
    ///
    /// Missing keys keep their [`CombatTables::default`] values.
    pub fn load(path: &Path) -> LoadResult<CombatTables> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatTables> {
        let tables: CombatTables = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        if !(0.0..=1.0).contains(&tables.evade_chance)
            || !(0.0..=1.0).contains(&tables.cautious_evade_chance)
        {
            anyhow::bail!("Combat chances must lie within [0, 1]");
        }

        Ok(tables)
    }
}
