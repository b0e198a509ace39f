//! Enemy decision policies.
//!
//! A policy only looks at the enemy's own health percentage and its ordered
//! attack list; it never inspects the player.

use crate::env::{AiPolicy, CombatTables, EnemyTemplate, RngOracle};

/// What the enemy does on its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyAction {
    Attack(String),
    /// Holds back; no damage this round.
    Evade,
}

impl AiPolicy {
    /// Chooses the enemy's action for this round.
    ///
    /// - Aggressive: above the low-health mark, a uniform random attack;
    ///   otherwise the first attack.
    /// - Cautious: below the low-health mark, holds back with the cautious
    ///   evade chance and otherwise uses the last attack; at or above it, a
    ///   uniform random attack.
    /// - Unrecognized: a uniform random attack.
    ///
    /// An enemy without attacks always holds back.
    pub fn decide_action(
        &self,
        attacks: &[String],
        health_percent: f64,
        rng: &mut impl RngOracle,
        tables: &CombatTables,
    ) -> EnemyAction {
        let (Some(first), Some(last)) = (attacks.first(), attacks.last()) else {
            return EnemyAction::Evade;
        };
        let low = tables.low_health_percent;

        let attack = match self {
            AiPolicy::Aggressive if health_percent > low => random_attack(attacks, rng),
            AiPolicy::Aggressive => first,
            AiPolicy::Cautious if health_percent < low => {
                if rng.chance(tables.cautious_evade_chance) {
                    return EnemyAction::Evade;
                }
                last
            }
            AiPolicy::Cautious | AiPolicy::Unrecognized(_) => random_attack(attacks, rng),
        };

        EnemyAction::Attack(attack.clone())
    }
}

/// Runs the enemy template's policy.
pub fn decide_action(
    enemy: &EnemyTemplate,
    health_percent: f64,
    rng: &mut impl RngOracle,
    tables: &CombatTables,
) -> EnemyAction {
    enemy
        .ai
        .decide_action(&enemy.attacks, health_percent, rng, tables)
}

fn random_attack<'a>(attacks: &'a [String], rng: &mut impl RngOracle) -> &'a String {
    &attacks[rng.pick(attacks.len())]
}
