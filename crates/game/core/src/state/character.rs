//! Player character model.
//!
//! The character is created once per session (new game or restored record)
//! and mutated in place by items, skills, crafting and combat. Derived stats
//! are cached here but always recomputed from skills; see
//! [`Character::recompute_derived_stats`].

use crate::config::GameConfig;
use crate::env::{ContentTables, GameEnv, SkillKind};
use crate::stats::{DerivedStats, ExperienceGain, apply_experience};

use super::error::CharacterError;
use super::inventory::Inventory;
use super::skills::SkillLevels;

/// Mutable player state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub(super) name: String,
    /// Capped at the configured maximum when healing, unbounded below when damaged.
    pub(super) health: i32,
    pub(super) is_werewolf: bool,
    pub(super) inventory: Inventory,
    pub(super) skills: SkillLevels,
    pub(super) skill_points: u32,
    /// Starts at 1.
    pub(super) level: u32,
    /// Experience carried into the current level.
    pub(super) experience: u64,
    /// Persisted, not used by any rule yet.
    pub(super) moral_alignment: i32,
    /// Persisted, not used by any rule yet.
    pub(super) forced_transform: bool,
    pub(super) location: String,
    pub(super) derived: DerivedStats,
}

/// Outcome of drinking a consumable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    pub item: String,
    /// Nominal heal amount of the item (before the health cap).
    pub heal_amount: i32,
    /// Health after use.
    pub health: i32,
}

/// Outcome of spending a skill point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillUpgrade {
    pub skill: SkillKind,
    pub level: u8,
    pub skill_points: u32,
}

/// One row of the skill tree, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTreeEntry<'a> {
    pub skill: SkillKind,
    pub level: u8,
    pub max_level: u8,
    pub description: &'a str,
}

impl SkillTreeEntry<'_> {
    pub fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }
}

impl Character {
    /// Fresh level-1 character with every table skill at 0 and an empty inventory.
    pub fn new(name: impl Into<String>, tables: &ContentTables) -> Self {
        let skills = SkillLevels::for_tables(tables);
        let derived = DerivedStats::compute(&skills);

        Self {
            name: name.into(),
            health: GameConfig::DEFAULT_MAX_HEALTH,
            is_werewolf: false,
            inventory: Inventory::new(),
            skills,
            skill_points: 0,
            level: 1,
            experience: 0,
            moral_alignment: 0,
            forced_transform: false,
            location: GameConfig::DEFAULT_LOCATION.to_string(),
            derived,
        }
    }

    /// New-game character: starting health, location and inventory from the config.
    pub fn new_game(name: impl Into<String>, env: GameEnv<'_>) -> Self {
        let config = env.config();
        let mut character = Self::new(name, env.tables());
        character.health = config.starting_health;
        character.location = config.starting_location.clone();
        character.inventory = Inventory::from_items(config.starting_inventory.iter().cloned());
        character.recompute_derived_stats();
        character
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_skill_points(mut self, skill_points: u32) -> Self {
        self.skill_points = skill_points;
        self
    }

    /// Sets a skill level directly (scenario setup) and recomputes derived stats.
    ///
    /// The level is not checked against the skill table.
    pub fn with_skill_level(mut self, skill: SkillKind, level: u8) -> Self {
        self.skills.set(skill, level);
        self.recompute_derived_stats();
        self
    }

    pub fn with_progress(mut self, level: u32, experience: u64) -> Self {
        self.level = level.max(1);
        self.experience = experience;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    pub fn is_werewolf(&self) -> bool {
        self.is_werewolf
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn skills(&self) -> &SkillLevels {
        &self.skills
    }

    pub fn skill_level(&self, skill: SkillKind) -> u8 {
        self.skills.level(skill)
    }

    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    pub fn moral_alignment(&self) -> i32 {
        self.moral_alignment
    }

    pub fn forced_transform(&self) -> bool {
        self.forced_transform
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn derived_stats(&self) -> DerivedStats {
        self.derived
    }

    /// Adds experience and applies every level-up it pays for, one skill point each.
    pub fn gain_experience(&mut self, amount: u64, config: &GameConfig) -> ExperienceGain {
        let gain = apply_experience(
            self.level,
            self.experience,
            amount,
            config.experience_per_level,
        );
        self.level = gain.level;
        self.experience = gain.experience;
        self.skill_points = self.skill_points.saturating_add(gain.skill_points());
        gain
    }

    /// Rebuilds derived stats from current skill levels.
    ///
    /// Must run after any skill change and after restoring a save record.
    pub fn recompute_derived_stats(&mut self) {
        self.derived = DerivedStats::compute(&self.skills);
    }

    /// Drinks one instance of a consumable from the inventory.
    ///
    /// Items missing from the item table count as not usable.
    pub fn consume_item(&mut self, item: &str, env: GameEnv<'_>) -> Result<ItemUse, CharacterError> {
        if !self.inventory.contains(item) {
            return Err(CharacterError::ItemNotOwned {
                item: item.to_string(),
            });
        }

        let heal_amount = env
            .tables()
            .item(item)
            .and_then(|definition| definition.kind.heal_amount())
            .ok_or_else(|| CharacterError::ItemNotUsable {
                item: item.to_string(),
            })?;

        let heal_amount = i32::from(heal_amount);
        let health = self.heal(heal_amount, env.config().max_health);
        self.inventory.remove_one(item);

        Ok(ItemUse {
            item: item.to_string(),
            heal_amount,
            health,
        })
    }

    /// Spends one skill point to raise `skill` by one level.
    pub fn upgrade_skill(
        &mut self,
        skill: SkillKind,
        tables: &ContentTables,
    ) -> Result<SkillUpgrade, CharacterError> {
        if self.skill_points == 0 {
            return Err(CharacterError::NoSkillPoints);
        }

        let definition = tables
            .skill(skill)
            .ok_or(CharacterError::UnknownSkill(skill))?;

        let current = self.skills.level(skill);
        if current >= definition.max_level {
            return Err(CharacterError::SkillMaxed {
                skill,
                max_level: definition.max_level,
            });
        }

        let level = current + 1;
        self.skills.set(skill, level);
        self.skill_points -= 1;
        self.recompute_derived_stats();

        Ok(SkillUpgrade {
            skill,
            level,
            skill_points: self.skill_points,
        })
    }

    /// Current level of every table skill, in table order.
    pub fn skill_tree<'a>(&self, tables: &'a ContentTables) -> Vec<SkillTreeEntry<'a>> {
        tables
            .skills()
            .iter()
            .map(|definition| SkillTreeEntry {
                skill: definition.kind,
                level: self.skills.level(definition.kind),
                max_level: definition.max_level,
                description: definition.description.as_str(),
            })
            .collect()
    }

    /// Subtracts damage without a lower bound. Returns the new health.
    pub(crate) fn take_damage(&mut self, amount: i32) -> i32 {
        self.health -= amount;
        self.health
    }

    /// Adds health, capped at `max_health`. Returns the new health.
    pub(crate) fn heal(&mut self, amount: i32, max_health: i32) -> i32 {
        self.health = (self.health + amount).min(max_health);
        self.health
    }
}
