//! Forest quest: the beast blocking the forest path.
//!
//! The quest only decides whether the player slips past the beast or has to
//! fight it; the fight itself is an ordinary [`run_combat`](crate::combat::run_combat)
//! against [`GameConfig::quest_enemy`](crate::GameConfig::quest_enemy).

use crate::env::{GameEnv, RngOracle, SkillKind};
use crate::state::{Character, ItemUse};

/// Potion the player may drink before facing the beast.
pub const QUEST_POTION: &str = "Healing Potion";

/// Base chance to sneak past the beast with Stealth level 1 or higher.
pub const SNEAK_BASE_CHANCE: f64 = 0.5;

/// Chance added per Stealth level.
pub const SNEAK_CHANCE_PER_LEVEL: f64 = 0.1;

/// How the player approaches the beast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForestApproach {
    #[strum(to_string = "Fight the beast")]
    Fight,
    #[strum(to_string = "Use Stealth to sneak past")]
    Sneak,
    #[strum(to_string = "Drink a Healing Potion to prepare")]
    DrinkPotion,
    /// Anything else the player typed.
    #[strum(to_string = "Hesitate")]
    Hesitate,
}

impl ForestApproach {
    pub const MENU: [ForestApproach; 3] = [
        ForestApproach::Fight,
        ForestApproach::Sneak,
        ForestApproach::DrinkPotion,
    ];

    /// Maps menu input; unrecognized input is hesitation.
    pub fn from_choice(input: &str) -> Self {
        match input.trim() {
            "1" => ForestApproach::Fight,
            "2" => ForestApproach::Sneak,
            "3" => ForestApproach::DrinkPotion,
            _ => ForestApproach::Hesitate,
        }
    }
}

/// Why the beast ends up fighting the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmbushReason {
    ChoseToFight,
    SneakFailed,
    NoStealth,
    /// Drank the potion first.
    Prepared(ItemUseSummary),
    NoPotion,
    Hesitated,
}

/// Potion drunk before the fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUseSummary {
    pub item: String,
    pub health: i32,
}

impl From<ItemUse> for ItemUseSummary {
    fn from(used: ItemUse) -> Self {
        Self {
            item: used.item,
            health: used.health,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ForestOutcome {
    SneakedPast,
    /// The beast attacks; a combat must follow.
    Ambushed(AmbushReason),
}

impl ForestOutcome {
    pub fn requires_combat(&self) -> bool {
        matches!(self, ForestOutcome::Ambushed(_))
    }
}

/// Chance to sneak past at the given Stealth level; zero without the skill.
pub fn sneak_chance(stealth_level: u8) -> f64 {
    if stealth_level == 0 {
        return 0.0;
    }
    SNEAK_BASE_CHANCE + SNEAK_CHANCE_PER_LEVEL * f64::from(stealth_level)
}

/// Resolves the player's approach.
///
/// Drinking the potion mutates the character; every other approach only
/// draws from `rng` (sneaking) or does nothing.
pub fn approach_forest(
    approach: ForestApproach,
    character: &mut Character,
    env: GameEnv<'_>,
    rng: &mut impl RngOracle,
) -> ForestOutcome {
    let reason = match approach {
        ForestApproach::Fight => AmbushReason::ChoseToFight,
        ForestApproach::Sneak => {
            let stealth = character.skill_level(SkillKind::Stealth);
            if stealth == 0 {
                AmbushReason::NoStealth
            } else if rng.chance(sneak_chance(stealth)) {
                return ForestOutcome::SneakedPast;
            } else {
                AmbushReason::SneakFailed
            }
        }
        ForestApproach::DrinkPotion => match character.consume_item(QUEST_POTION, env) {
            Ok(used) => AmbushReason::Prepared(used.into()),
            Err(_) => AmbushReason::NoPotion,
        },
        ForestApproach::Hesitate => AmbushReason::Hesitated,
    };

    ForestOutcome::Ambushed(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::fixtures::{self, ScriptedRng};
    use crate::state::Inventory;

    #[test]
    fn choices_map_to_approaches() {
        assert_eq!(ForestApproach::from_choice("1"), ForestApproach::Fight);
        assert_eq!(ForestApproach::from_choice("2 "), ForestApproach::Sneak);
        assert_eq!(ForestApproach::from_choice("3"), ForestApproach::DrinkPotion);
        assert_eq!(ForestApproach::from_choice("run"), ForestApproach::Hesitate);
    }

    #[test]
    fn sneak_chance_grows_with_stealth() {
        assert_eq!(sneak_chance(0), 0.0);
        assert!((sneak_chance(1) - 0.6).abs() < 1e-9);
        assert!((sneak_chance(3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn sneaking_without_stealth_is_an_ambush() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let mut character = Character::new("Lycan", &tables);
        let mut rng = ScriptedRng::new();

        let outcome = approach_forest(
            ForestApproach::Sneak,
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
        );
        assert_eq!(outcome, ForestOutcome::Ambushed(AmbushReason::NoStealth));
    }

    #[test]
    fn sneaking_rolls_against_stealth() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let env = GameEnv::new(&tables, &config);
        let mut character =
            Character::new("Lycan", &tables).with_skill_level(SkillKind::Stealth, 2);
        let mut rng = ScriptedRng::new().with_units([0.69, 0.71]);

        assert_eq!(
            approach_forest(ForestApproach::Sneak, &mut character, env, &mut rng),
            ForestOutcome::SneakedPast
        );
        assert_eq!(
            approach_forest(ForestApproach::Sneak, &mut character, env, &mut rng),
            ForestOutcome::Ambushed(AmbushReason::SneakFailed)
        );
    }

    #[test]
    fn drinking_the_potion_heals_before_the_fight() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let env = GameEnv::new(&tables, &config);
        let mut character = Character::new("Lycan", &tables)
            .with_health(40)
            .with_inventory(Inventory::from_items([QUEST_POTION]));
        let mut rng = ScriptedRng::new();

        let outcome = approach_forest(ForestApproach::DrinkPotion, &mut character, env, &mut rng);
        assert_eq!(
            outcome,
            ForestOutcome::Ambushed(AmbushReason::Prepared(ItemUseSummary {
                item: QUEST_POTION.to_string(),
                health: 70,
            }))
        );
        assert!(character.inventory().is_empty());

        let outcome = approach_forest(ForestApproach::DrinkPotion, &mut character, env, &mut rng);
        assert_eq!(outcome, ForestOutcome::Ambushed(AmbushReason::NoPotion));
        assert!(outcome.requires_combat());
    }
}
