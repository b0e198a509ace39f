//! Shared setup for the scenario tests.
#![allow(dead_code)]

use std::collections::VecDeque;

use game_core::{
    AiPolicy, CombatTables, ContentTables, EnemyTemplate, ItemDefinition, ItemKind, Recipe,
    RngOracle, SkillDefinition, SkillKind,
};

pub fn werewolf_tables() -> ContentTables {
    ContentTables::new(
        vec![
            ItemDefinition::new("Silver Dagger", ItemKind::Weapon { damage: 15 }),
            ItemDefinition::new("Healing Potion", ItemKind::Consumable { heal: 30 }),
            ItemDefinition::new("Mystical Charm", ItemKind::Quest),
            ItemDefinition::new("Sacred Herb", ItemKind::Quest),
            ItemDefinition::new("Gold", ItemKind::Currency),
            ItemDefinition::new("Wolf Fang", ItemKind::Material),
            ItemDefinition::new("Enchanted Wood", ItemKind::Material),
            ItemDefinition::new("Silver Sword", ItemKind::Weapon { damage: 30 }),
            ItemDefinition::new("Strong Healing Potion", ItemKind::Consumable { heal: 70 }),
        ],
        vec![
            SkillDefinition::new(SkillKind::BeastControl, 3),
            SkillDefinition::new(SkillKind::EnhancedStrength, 5),
            SkillDefinition::new(SkillKind::HealingFactor, 4),
            SkillDefinition::new(SkillKind::Stealth, 3),
        ],
        vec![
            EnemyTemplate::new("Goblin", 40, ["slash", "stab"], AiPolicy::Aggressive),
            EnemyTemplate::new("Hunter", 60, ["shoot", "slash"], AiPolicy::Cautious),
            EnemyTemplate::new("Alpha Wolf", 120, ["bite", "claw"], AiPolicy::Aggressive),
        ],
        vec![
            Recipe::new("Silver Sword", ["Silver Dagger", "Enchanted Wood", "Wolf Fang"]),
            Recipe::new("Strong Healing Potion", ["Healing Potion", "Sacred Herb"]),
        ],
        CombatTables::default(),
    )
    .expect("werewolf tables are valid")
}

/// Deterministic draws queued by the test.
#[derive(Debug, Default)]
pub struct Script {
    ranges: VecDeque<i32>,
    units: VecDeque<f64>,
}

impl Script {
    pub fn ranges(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ranges: values.into_iter().collect(),
            units: VecDeque::new(),
        }
    }

    pub fn and_units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    pub fn is_spent(&self) -> bool {
        self.ranges.is_empty() && self.units.is_empty()
    }
}

impl RngOracle for Script {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        let value = self.ranges.pop_front().expect("unscripted range draw");
        assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
        value
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("unscripted unit draw")
    }
}
