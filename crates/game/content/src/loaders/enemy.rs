//! Enemy template loader.

use std::path::Path;

use game_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<EnemyTemplate>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        Ok(catalog.enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::AiPolicy;

    #[test]
    fn ai_tags_are_parsed() {
        let enemies = EnemyLoader::parse(
            r#"(enemies: [
                (name: "Goblin", health: 40, attacks: ["slash", "stab"], ai: "aggressive"),
                (name: "Hunter", health: 60, attacks: ["shoot", "slash"], ai: "cautious"),
                (name: "Wisp", health: 5, attacks: ["flicker"], ai: "erratic"),
            ])"#,
        )
        .unwrap();

        assert_eq!(enemies[0].ai, AiPolicy::Aggressive);
        assert_eq!(enemies[1].ai, AiPolicy::Cautious);
        assert_eq!(enemies[2].ai, AiPolicy::Unrecognized("erratic".to_string()));
        assert_eq!(enemies[1].attacks, vec!["shoot", "slash"]);
    }
}
