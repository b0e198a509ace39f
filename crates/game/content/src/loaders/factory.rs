//! Content factory for building the reference tables from data files.

use std::path::{Path, PathBuf};

use game_core::{
    CombatTables, ContentTables, EnemyTemplate, GameConfig, ItemDefinition, Recipe,
    SkillDefinition,
};

use crate::loaders::{
    ConfigLoader, EnemyLoader, ItemLoader, LoadResult, RecipeLoader, SkillLoader, TablesLoader,
};

const BUILTIN_ITEMS: &str = include_str!("../../data/items.ron");
const BUILTIN_SKILLS: &str = include_str!("../../data/skills.ron");
const BUILTIN_ENEMIES: &str = include_str!("../../data/enemies.ron");
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.ron");
const BUILTIN_CONFIG: &str = include_str!("../../data/config.toml");
const BUILTIN_TABLES: &str = include_str!("../../data/tables.toml");

/// Everything a session reads but never mutates.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub tables: ContentTables,
    pub config: GameConfig,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.toml
/// ├── items.ron
/// ├── skills.ron
/// ├── enemies.ron
/// └── recipes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Content shipped with the crate, embedded at compile time.
    pub fn builtin() -> LoadResult<GameContent> {
        let tables = assemble(
            ItemLoader::parse(BUILTIN_ITEMS)?,
            SkillLoader::parse(BUILTIN_SKILLS)?,
            EnemyLoader::parse(BUILTIN_ENEMIES)?,
            RecipeLoader::parse(BUILTIN_RECIPES)?,
            TablesLoader::parse(BUILTIN_TABLES)?,
        )?;
        let config = ConfigLoader::parse(BUILTIN_CONFIG)?;

        validate_config(&config, &tables)?;
        Ok(GameContent { tables, config })
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load combat balance tables from `tables.toml`.
    pub fn load_combat_tables(&self) -> LoadResult<CombatTables> {
        TablesLoader::load(&self.data_dir.join("tables.toml"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the skill tree from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load crafting recipes from `recipes.ron`.
    pub fn load_recipes(&self) -> LoadResult<Vec<Recipe>> {
        RecipeLoader::load(&self.data_dir.join("recipes.ron"))
    }

    /// Load and cross-check every reference table.
    pub fn load_tables(&self) -> LoadResult<ContentTables> {
        assemble(
            self.load_items()?,
            self.load_skills()?,
            self.load_enemies()?,
            self.load_recipes()?,
            self.load_combat_tables()?,
        )
    }

    /// Load the tables and the configuration, checking the configuration
    /// only names known items and enemies.
    pub fn load_all(&self) -> LoadResult<GameContent> {
        let tables = self.load_tables()?;
        let config = self.load_config()?;

        validate_config(&config, &tables)?;
        Ok(GameContent { tables, config })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn assemble(
    items: Vec<ItemDefinition>,
    skills: Vec<SkillDefinition>,
    enemies: Vec<EnemyTemplate>,
    recipes: Vec<Recipe>,
    combat: CombatTables,
) -> LoadResult<ContentTables> {
    ContentTables::new(items, skills, enemies, recipes, combat)
        .map_err(|e| anyhow::anyhow!("Invalid content tables: {}", e))
}

fn validate_config(config: &GameConfig, tables: &ContentTables) -> LoadResult<()> {
    if let Some(item) = config
        .starting_inventory
        .iter()
        .find(|item| tables.item(item).is_none())
    {
        anyhow::bail!("Starting inventory names unknown item '{}'", item);
    }
    if tables.enemy(&config.quest_enemy).is_none() {
        anyhow::bail!("Quest enemy '{}' is not defined", config.quest_enemy);
    }
    if config.starting_health <= 0 || config.starting_health > config.max_health {
        anyhow::bail!(
            "Starting health {} must lie within 1..={}",
            config.starting_health,
            config.max_health
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{AiPolicy, SkillKind};

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn builtin_content_matches_the_werewolf_game() {
        let GameContent { tables, config } = ContentFactory::builtin().unwrap();

        assert_eq!(tables.items().len(), 9);
        assert_eq!(tables.skills().len(), 4);
        assert_eq!(tables.skill(SkillKind::EnhancedStrength).unwrap().max_level, 5);
        let wolf = tables.enemy("Alpha Wolf").unwrap();
        assert_eq!(wolf.health, 120);
        assert_eq!(wolf.ai, AiPolicy::Aggressive);
        assert_eq!(
            tables.recipe("Silver Sword").unwrap().ingredients,
            vec!["Silver Dagger", "Enchanted Wood", "Wolf Fang"]
        );
        assert_eq!(*tables.combat(), CombatTables::default());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn data_directory_matches_builtin() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let loaded = ContentFactory::new(dir).load_all().unwrap();
        let builtin = ContentFactory::builtin().unwrap();

        assert_eq!(loaded.tables, builtin.tables);
        assert_eq!(loaded.config, builtin.config);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let err = ContentFactory::new("/nonexistent/werewolf")
            .load_tables()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn config_must_reference_known_content() {
        let GameContent { tables, config } = ContentFactory::builtin().unwrap();

        let bad_item = config.clone().with_starting_inventory(["Moonstone"]);
        assert!(validate_config(&bad_item, &tables).is_err());

        let mut bad_enemy = config;
        bad_enemy.quest_enemy = "Dragon".to_string();
        assert!(validate_config(&bad_enemy, &tables).is_err());
    }
}
