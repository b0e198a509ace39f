//! Turn-based combat between the character and a single enemy.
//!
//! # Architecture
//!
//! - [`Encounter`] owns the spawned enemy and resolves one round at a time.
//! - [`run_combat`] drives an encounter to its end, asking an
//!   [`ActionProvider`] for each player action and forwarding every
//!   [`GameEvent`] to an [`EventSink`].
//! - Enemy decisions live in [`ai`], damage formulas in [`damage`].
//!
//! All randomness comes from the caller's [`RngOracle`].

pub mod action;
pub mod ai;
pub mod damage;
pub mod encounter;
pub mod errors;
pub mod result;

pub use action::PlayerAction;
pub use ai::{EnemyAction, decide_action};
pub use encounter::{CombatView, EnemyInstance, Encounter};
pub use errors::CombatError;
pub use result::{CombatOutcome, RoundReport};

use crate::env::{GameEnv, RngOracle};
use crate::event::GameEvent;
use crate::state::Character;

/// Supplies the player's action for each round.
///
/// This is the only point where a combat waits on the outside world.
/// Returning `None` means the player has left; the combat stops without an
/// outcome.
pub trait ActionProvider {
    fn provide_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction>;
}

impl<F> ActionProvider for F
where
    F: FnMut(&CombatView<'_>) -> PlayerAction,
{
    fn provide_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction> {
        Some(self(view))
    }
}

/// Receives combat events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Fights the named enemy until one side falls.
///
/// Fails when the enemy is not in the tables, leaving the character untouched,
/// or when the provider gives up mid-fight. Rounds already played stand.
pub fn run_combat(
    enemy: &str,
    character: &mut Character,
    env: GameEnv<'_>,
    rng: &mut impl RngOracle,
    provider: &mut impl ActionProvider,
    sink: &mut impl EventSink,
) -> Result<CombatOutcome, CombatError> {
    let mut encounter = Encounter::begin(enemy, env.tables())?;
    sink.emit(GameEvent::EncounterStarted {
        enemy: encounter.enemy().name.clone(),
        health: encounter.enemy().health,
    });

    if character.is_defeated() {
        sink.emit(GameEvent::PlayerDefeated);
        return Ok(encounter.forfeit());
    }

    loop {
        let view = encounter.view(character);
        let round = view.round;
        let Some(action) = provider.provide_action(&view) else {
            return Err(CombatError::Abandoned { round });
        };
        let report = encounter.resolve_round(action, character, env, rng)?;
        for event in report.events {
            sink.emit(event);
        }
        if let Some(outcome) = report.outcome {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::fixtures::{self, ScriptedRng};

    #[test]
    fn runs_until_the_enemy_falls() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let mut character = Character::new("Lycan", &tables);
        // Two strikes of 20 each; the goblin stabs once in between.
        let mut rng = ScriptedRng::new().with_ranges([0, 1, 0]);
        let mut views = Vec::new();
        let mut provider = |view: &CombatView<'_>| {
            views.push((view.round, view.player_health, view.enemy_health));
            PlayerAction::PrimaryStrike
        };
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome = run_combat(
            "Goblin",
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
            &mut provider,
            &mut events,
        )
        .unwrap();

        assert_eq!(outcome, CombatOutcome::PlayerVictory);
        assert_eq!(views, vec![(1, 100, 40), (2, 90, 20)]);
        assert_eq!(
            events.first(),
            Some(&GameEvent::EncounterStarted {
                enemy: "Goblin".to_string(),
                health: 40
            })
        );
        assert!(events.contains(&GameEvent::ExperienceGained { amount: 50 }));
        assert_eq!(character.experience(), 50);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn unknown_enemy_leaves_character_untouched() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let mut character = Character::new("Lycan", &tables);
        let before = character.clone();
        let mut events: Vec<GameEvent> = Vec::new();

        let result = run_combat(
            "Dragon",
            &mut character,
            GameEnv::new(&tables, &config),
            &mut ScriptedRng::new(),
            &mut |_: &CombatView<'_>| PlayerAction::PrimaryStrike,
            &mut events,
        );

        assert_eq!(result, Err(CombatError::UnknownEnemyType("Dragon".to_string())));
        assert_eq!(character, before);
        assert!(events.is_empty());
    }

    #[test]
    fn defeated_character_gets_no_round() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let mut character = Character::new("Lycan", &tables).with_health(0);
        let mut events: Vec<GameEvent> = Vec::new();

        let outcome = run_combat(
            "Goblin",
            &mut character,
            GameEnv::new(&tables, &config),
            &mut ScriptedRng::new(),
            &mut |_: &CombatView<'_>| -> PlayerAction { panic!("no round after defeat") },
            &mut events,
        )
        .unwrap();

        assert_eq!(outcome, CombatOutcome::PlayerDefeated);
        assert_eq!(events.last(), Some(&GameEvent::PlayerDefeated));
    }

    struct Leaves {
        after: u32,
    }

    impl ActionProvider for Leaves {
        fn provide_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction> {
            (view.round <= self.after).then_some(PlayerAction::PrimaryStrike)
        }
    }

    #[test]
    fn leaving_stops_the_fight_without_an_outcome() {
        let tables = fixtures::tables();
        let config = GameConfig::default();
        let mut character = Character::new("Lycan", &tables);
        // One strike of 20, the goblin stabs back, then the player is gone.
        let mut rng = ScriptedRng::new().with_ranges([0, 1]);
        let mut events: Vec<GameEvent> = Vec::new();

        let result = run_combat(
            "Goblin",
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
            &mut Leaves { after: 1 },
            &mut events,
        );

        assert_eq!(result, Err(CombatError::Abandoned { round: 2 }));
        assert_eq!(character.health(), 90);
        assert_eq!(character.experience(), 0);
        assert!(!events.contains(&GameEvent::PlayerDefeated));
        assert!(rng.is_exhausted());
    }
}
