//! Combat balance tables.
//!
//! These define the numbers behind a combat round (strike damage, evasion odds,
//! enemy attack damage). They do NOT define entity data; see the item, skill,
//! enemy and recipe definitions for that.

use std::collections::BTreeMap;

/// Damage profile of a player strike.
///
/// Damage is `base_damage + attack_bonus + U[-variance, variance]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeProfile {
    pub base_damage: i32,
    pub variance: i32,
    /// Health the player pays before the strike lands.
    #[cfg_attr(feature = "serde", serde(default))]
    pub health_cost: i32,
}

impl StrikeProfile {
    pub const fn new(base_damage: i32, variance: i32, health_cost: i32) -> Self {
        Self {
            base_damage,
            variance,
            health_cost,
        }
    }
}

/// Numeric rules of a combat round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTables {
    pub primary_strike: StrikeProfile,
    pub heavy_strike: StrikeProfile,
    /// Probability that an evade stance nullifies the incoming attack.
    pub evade_chance: f64,
    /// Experience awarded for defeating an enemy.
    pub victory_experience: u64,
    /// Health percentage that separates "healthy" from "low" in enemy policies.
    pub low_health_percent: f64,
    /// Probability that a cautious enemy at low health holds back.
    pub cautious_evade_chance: f64,
    /// Damage per enemy attack name.
    pub attack_damage: BTreeMap<String, i32>,
    /// Damage of attacks missing from `attack_damage`.
    pub default_attack_damage: i32,
}

impl CombatTables {
    pub const DEFAULT_PRIMARY_STRIKE: StrikeProfile = StrikeProfile::new(20, 5, 0);
    pub const DEFAULT_HEAVY_STRIKE: StrikeProfile = StrikeProfile::new(30, 10, 10);
    pub const DEFAULT_EVADE_CHANCE: f64 = 0.7;
    pub const DEFAULT_VICTORY_EXPERIENCE: u64 = 50;
    pub const DEFAULT_LOW_HEALTH_PERCENT: f64 = 30.0;
    pub const DEFAULT_CAUTIOUS_EVADE_CHANCE: f64 = 0.5;
    pub const DEFAULT_ATTACK_DAMAGE: i32 = 10;
    pub const DEFAULT_ATTACKS: [(&'static str, i32); 5] = [
        ("slash", 15),
        ("stab", 10),
        ("shoot", 20),
        ("bite", 25),
        ("claw", 20),
    ];

    pub fn new() -> Self {
        Self {
            primary_strike: Self::DEFAULT_PRIMARY_STRIKE,
            heavy_strike: Self::DEFAULT_HEAVY_STRIKE,
            evade_chance: Self::DEFAULT_EVADE_CHANCE,
            victory_experience: Self::DEFAULT_VICTORY_EXPERIENCE,
            low_health_percent: Self::DEFAULT_LOW_HEALTH_PERCENT,
            cautious_evade_chance: Self::DEFAULT_CAUTIOUS_EVADE_CHANCE,
            attack_damage: Self::DEFAULT_ATTACKS
                .iter()
                .map(|(name, damage)| (name.to_string(), *damage))
                .collect(),
            default_attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
        }
    }

    /// Base damage of an enemy attack, falling back to the default for unknown names.
    pub fn attack_damage(&self, attack: &str) -> i32 {
        self.attack_damage
            .get(attack)
            .copied()
            .unwrap_or(self.default_attack_damage)
    }
}

impl Default for CombatTables {
    fn default() -> Self {
        Self::new()
    }
}
