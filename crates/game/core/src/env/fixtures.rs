//! Standard werewolf tables and scripted randomness for unit tests.

use std::collections::VecDeque;

use super::*;

pub(crate) fn tables() -> ContentTables {
    let items = vec![
        ItemDefinition::new("Silver Dagger", ItemKind::Weapon { damage: 15 }),
        ItemDefinition::new("Healing Potion", ItemKind::Consumable { heal: 30 }),
        ItemDefinition::new("Mystical Charm", ItemKind::Quest),
        ItemDefinition::new("Sacred Herb", ItemKind::Quest),
        ItemDefinition::new("Gold", ItemKind::Currency),
        ItemDefinition::new("Wolf Fang", ItemKind::Material),
        ItemDefinition::new("Enchanted Wood", ItemKind::Material),
        ItemDefinition::new("Silver Sword", ItemKind::Weapon { damage: 30 }),
        ItemDefinition::new("Strong Healing Potion", ItemKind::Consumable { heal: 70 }),
    ];
    let skills = vec![
        SkillDefinition::new(SkillKind::BeastControl, 3),
        SkillDefinition::new(SkillKind::EnhancedStrength, 5),
        SkillDefinition::new(SkillKind::HealingFactor, 4),
        SkillDefinition::new(SkillKind::Stealth, 3),
    ];
    let enemies = vec![
        EnemyTemplate::new("Goblin", 40, ["slash", "stab"], AiPolicy::Aggressive),
        EnemyTemplate::new("Hunter", 60, ["shoot", "slash"], AiPolicy::Cautious),
        EnemyTemplate::new("Alpha Wolf", 120, ["bite", "claw"], AiPolicy::Aggressive),
    ];
    let recipes = vec![
        Recipe::new("Silver Sword", ["Silver Dagger", "Enchanted Wood", "Wolf Fang"]),
        Recipe::new("Strong Healing Potion", ["Healing Potion", "Sacred Herb"]),
    ];

    ContentTables::new(items, skills, enemies, recipes, CombatTables::default())
        .expect("fixture tables are valid")
}

/// Replays queued draws; panics when a test draws more than it scripted.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRng {
    ranges: VecDeque<i32>,
    units: VecDeque<f64>,
}

impl ScriptedRng {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_ranges(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ranges.extend(values);
        self
    }

    pub(crate) fn with_units(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(values);
        self
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.ranges.is_empty() && self.units.is_empty()
    }
}

impl RngOracle for ScriptedRng {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        let value = self.ranges.pop_front().expect("unscripted range draw");
        assert!(
            (min..=max).contains(&value),
            "scripted {value} outside [{min}, {max}]"
        );
        value
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().expect("unscripted unit draw")
    }
}
