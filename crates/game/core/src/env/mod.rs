//! Read-only reference data.
//!
//! Items, skills, enemies, recipes and combat balance tables are loaded once at
//! process start and never mutated. [`ContentTables`] owns them; [`GameEnv`]
//! bundles a borrowed view of the tables and the [`GameConfig`] so rules can
//! reach everything they need without ambient globals.
mod enemies;
mod error;
mod items;
mod recipes;
mod rng;
mod skills;
mod tables;

#[cfg(test)]
pub(crate) mod fixtures;

pub use enemies::{AiPolicy, EnemyTemplate};
pub use error::TablesError;
pub use items::{ItemCategory, ItemDefinition, ItemKind};
pub use recipes::Recipe;
pub use rng::{GameRng, RngOracle};
pub use skills::{SkillDefinition, SkillKind};
pub use tables::{CombatTables, StrikeProfile};

use std::collections::HashSet;

use crate::config::GameConfig;

/// Immutable reference tables.
///
/// Entries keep their definition order, which the client uses for menu
/// numbering. Lookups are linear; the tables hold a handful of entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentTables {
    items: Vec<ItemDefinition>,
    skills: Vec<SkillDefinition>,
    enemies: Vec<EnemyTemplate>,
    recipes: Vec<Recipe>,
    combat: CombatTables,
}

impl ContentTables {
    /// Assembles and validates the reference tables.
    ///
    /// Names must be unique per table, recipes may only mention known items,
    /// and every enemy needs positive health and at least one attack.
    pub fn new(
        items: Vec<ItemDefinition>,
        skills: Vec<SkillDefinition>,
        enemies: Vec<EnemyTemplate>,
        recipes: Vec<Recipe>,
        combat: CombatTables,
    ) -> Result<Self, TablesError> {
        let mut item_names = HashSet::new();
        for item in &items {
            if !item_names.insert(item.name.as_str()) {
                return Err(TablesError::DuplicateItem(item.name.clone()));
            }
        }

        let mut skill_kinds = HashSet::new();
        for skill in &skills {
            if !skill_kinds.insert(skill.kind) {
                return Err(TablesError::DuplicateSkill(skill.kind));
            }
        }

        let mut enemy_names = HashSet::new();
        for enemy in &enemies {
            if !enemy_names.insert(enemy.name.as_str()) {
                return Err(TablesError::DuplicateEnemy(enemy.name.clone()));
            }
            if enemy.health <= 0 {
                return Err(TablesError::InvalidEnemyHealth {
                    name: enemy.name.clone(),
                    health: enemy.health,
                });
            }
            if enemy.attacks.is_empty() {
                return Err(TablesError::EnemyWithoutAttacks(enemy.name.clone()));
            }
        }

        let mut outputs = HashSet::new();
        for recipe in &recipes {
            if !outputs.insert(recipe.output.as_str()) {
                return Err(TablesError::DuplicateRecipe(recipe.output.clone()));
            }
            if !item_names.contains(recipe.output.as_str()) {
                return Err(TablesError::UnknownRecipeOutput(recipe.output.clone()));
            }
            if recipe.ingredients.is_empty() {
                return Err(TablesError::EmptyRecipe(recipe.output.clone()));
            }
            if let Some(ingredient) = recipe
                .ingredients
                .iter()
                .find(|ingredient| !item_names.contains(ingredient.as_str()))
            {
                return Err(TablesError::UnknownIngredient {
                    recipe: recipe.output.clone(),
                    ingredient: ingredient.clone(),
                });
            }
        }

        Ok(Self {
            items,
            skills,
            enemies,
            recipes,
            combat,
        })
    }

    pub fn item(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    pub fn skill(&self, kind: SkillKind) -> Option<&SkillDefinition> {
        self.skills.iter().find(|skill| skill.kind == kind)
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn enemy(&self, name: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|enemy| enemy.name == name)
    }

    pub fn enemies(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    /// Recipe producing the given item.
    pub fn recipe(&self, output: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.output == output)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn combat(&self) -> &CombatTables {
        &self.combat
    }
}

/// Borrowed view of everything the rules read but never mutate.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    tables: &'a ContentTables,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(tables: &'a ContentTables, config: &'a GameConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &'a ContentTables {
        self.tables
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn combat(&self) -> &'a CombatTables {
        self.tables.combat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ItemDefinition> {
        vec![
            ItemDefinition::new("Healing Potion", ItemKind::Consumable { heal: 30 }),
            ItemDefinition::new("Sacred Herb", ItemKind::Quest),
            ItemDefinition::new("Strong Healing Potion", ItemKind::Consumable { heal: 70 }),
        ]
    }

    #[test]
    fn standard_fixture_is_valid() {
        let tables = fixtures::tables();
        assert_eq!(tables.enemy("Goblin").map(|enemy| enemy.health), Some(40));
        assert_eq!(tables.skill(SkillKind::Stealth).map(|s| s.max_level), Some(3));
        assert!(tables.recipe("Silver Sword").is_some());
        assert!(tables.item("Moonstone").is_none());
    }

    #[test]
    fn rejects_duplicate_items() {
        let mut duplicated = items();
        duplicated.push(ItemDefinition::new("Sacred Herb", ItemKind::Material));
        let err = ContentTables::new(duplicated, vec![], vec![], vec![], CombatTables::default())
            .unwrap_err();
        assert_eq!(err, TablesError::DuplicateItem("Sacred Herb".to_string()));
    }

    #[test]
    fn rejects_recipes_with_unknown_ingredients() {
        let recipes = vec![Recipe::new(
            "Strong Healing Potion",
            ["Healing Potion", "Moon Dust"],
        )];
        let err = ContentTables::new(items(), vec![], vec![], recipes, CombatTables::default())
            .unwrap_err();
        assert_eq!(
            err,
            TablesError::UnknownIngredient {
                recipe: "Strong Healing Potion".to_string(),
                ingredient: "Moon Dust".to_string(),
            }
        );
    }

    #[test]
    fn rejects_enemies_without_attacks() {
        let enemies = vec![EnemyTemplate::new(
            "Shade",
            10,
            Vec::<String>::new(),
            AiPolicy::Cautious,
        )];
        let err = ContentTables::new(items(), vec![], enemies, vec![], CombatTables::default())
            .unwrap_err();
        assert_eq!(err, TablesError::EnemyWithoutAttacks("Shade".to_string()));
    }
}
