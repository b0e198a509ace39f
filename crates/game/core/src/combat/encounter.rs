//! Encounter state and round resolution.
//!
//! A round resolves in a fixed order:
//!
//! 1. the player's action (strike damage, heavy-strike recoil, evade stance
//!    or forfeit); recoil that kills the player ends the encounter at once
//! 2. enemy health check; a kill awards experience and the victory heal
//! 3. enemy policy on its health percentage
//! 4. the attack's damage, optionally nullified by the evade stance
//! 5. player health check
//!
//! Nothing is resolved after the player's health reaches zero.

use crate::env::{AiPolicy, ContentTables, EnemyTemplate, GameEnv, RngOracle};
use crate::event::GameEvent;
use crate::state::Character;

use super::action::PlayerAction;
use super::ai::EnemyAction;
use super::damage::{applied_damage, health_percent, roll_strike};
use super::errors::CombatError;
use super::result::{CombatOutcome, RoundReport};

/// Enemy spawned for one encounter, discarded when it ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemyInstance {
    pub name: String,
    pub health: i32,
    pub base_health: i32,
    pub attacks: Vec<String>,
    pub ai: AiPolicy,
}

impl EnemyInstance {
    pub fn spawn(template: &EnemyTemplate) -> Self {
        Self {
            name: template.name.clone(),
            health: template.health,
            base_health: template.health,
            attacks: template.attacks.clone(),
            ai: template.ai.clone(),
        }
    }

    pub fn health_percent(&self) -> f64 {
        health_percent(self.health, self.base_health)
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

/// What the player sees when choosing an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatView<'a> {
    /// Round about to be resolved (1-based).
    pub round: u32,
    pub player_health: i32,
    pub enemy: &'a str,
    pub enemy_health: i32,
}

/// One fight between the character and a single enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Encounter {
    enemy: EnemyInstance,
    rounds: u32,
    outcome: Option<CombatOutcome>,
}

impl Encounter {
    /// Spawns the named enemy from the tables.
    pub fn begin(enemy: &str, tables: &ContentTables) -> Result<Self, CombatError> {
        let template = tables
            .enemy(enemy)
            .ok_or_else(|| CombatError::UnknownEnemyType(enemy.to_string()))?;

        Ok(Self {
            enemy: EnemyInstance::spawn(template),
            rounds: 0,
            outcome: None,
        })
    }

    pub fn enemy(&self) -> &EnemyInstance {
        &self.enemy
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn view<'a>(&'a self, character: &Character) -> CombatView<'a> {
        CombatView {
            round: self.rounds + 1,
            player_health: character.health(),
            enemy: &self.enemy.name,
            enemy_health: self.enemy.health,
        }
    }

    /// Ends the encounter without a round when the character enters it
    /// already at zero health.
    pub(crate) fn forfeit(&mut self) -> CombatOutcome {
        let outcome = CombatOutcome::PlayerDefeated;
        self.outcome = Some(outcome);
        outcome
    }

    /// Resolves one full round for the given player action.
    pub fn resolve_round(
        &mut self,
        action: PlayerAction,
        character: &mut Character,
        env: GameEnv<'_>,
        rng: &mut impl RngOracle,
    ) -> Result<RoundReport, CombatError> {
        if self.is_finished() {
            return Err(CombatError::EncounterFinished);
        }
        self.rounds += 1;

        let report = self.play_round(action, character, env, rng);
        self.outcome = report.outcome;
        Ok(report)
    }

    fn play_round(
        &mut self,
        action: PlayerAction,
        character: &mut Character,
        env: GameEnv<'_>,
        rng: &mut impl RngOracle,
    ) -> RoundReport {
        let combat = env.combat();
        let mut report = RoundReport::new(self.rounds);
        let attack_bonus = character.derived_stats().attack_bonus;

        let mut evading = false;
        let damage = match action {
            PlayerAction::PrimaryStrike => roll_strike(&combat.primary_strike, attack_bonus, rng),
            PlayerAction::HeavyStrike => {
                let profile = &combat.heavy_strike;
                let damage = roll_strike(profile, attack_bonus, rng);
                if profile.health_cost > 0 {
                    let health = character.take_damage(profile.health_cost);
                    report.push(GameEvent::HeavyStrikeRecoil {
                        cost: profile.health_cost,
                        health,
                    });
                }
                if character.is_defeated() {
                    report.push(GameEvent::PlayerSelfDefeated);
                    return report.finish(CombatOutcome::PlayerSelfInflictedDefeat);
                }
                damage
            }
            PlayerAction::Evade => {
                evading = true;
                report.push(GameEvent::EvadeStance);
                0
            }
            PlayerAction::Invalid => {
                report.push(GameEvent::TurnForfeited);
                0
            }
        };

        if matches!(action, PlayerAction::PrimaryStrike | PlayerAction::HeavyStrike) {
            let damage = applied_damage(damage);
            self.enemy.health -= damage;
            report.push(GameEvent::PlayerStruck { action, damage });
        }

        if self.enemy.is_defeated() {
            self.award_victory(character, env, &mut report);
            return report.finish(CombatOutcome::PlayerVictory);
        }

        let decision = self.enemy.ai.decide_action(
            &self.enemy.attacks,
            self.enemy.health_percent(),
            rng,
            combat,
        );
        let attack = match decision {
            EnemyAction::Evade => {
                report.push(GameEvent::EnemyHeldBack {
                    enemy: self.enemy.name.clone(),
                });
                return report;
            }
            EnemyAction::Attack(attack) => attack,
        };

        let mut damage = combat.attack_damage(&attack);
        report.push(GameEvent::EnemyAttacked {
            enemy: self.enemy.name.clone(),
            attack,
            damage,
        });

        if evading {
            if rng.chance(combat.evade_chance) {
                report.push(GameEvent::EvadeSucceeded);
                damage = 0;
            } else {
                report.push(GameEvent::EvadeFailed);
            }
        }

        let health = character.take_damage(damage);
        report.push(GameEvent::DamageTaken { damage, health });

        if character.is_defeated() {
            report.push(GameEvent::PlayerDefeated);
            return report.finish(CombatOutcome::PlayerDefeated);
        }

        report
    }

    fn award_victory(&self, character: &mut Character, env: GameEnv<'_>, report: &mut RoundReport) {
        let config = env.config();
        report.push(GameEvent::EnemyDefeated {
            enemy: self.enemy.name.clone(),
        });

        let amount = env.combat().victory_experience;
        let gain = character.gain_experience(amount, config);
        report.push(GameEvent::ExperienceGained { amount });
        if gain.leveled_up() {
            report.push(GameEvent::LeveledUp {
                level: gain.level,
                skill_points: character.skill_points(),
            });
        }

        let heal_bonus = character.derived_stats().heal_bonus;
        if heal_bonus > 0 {
            let health = character.heal(heal_bonus, config.max_health);
            report.push(GameEvent::VictoryHeal {
                amount: heal_bonus,
                health,
            });
        }
    }
}
