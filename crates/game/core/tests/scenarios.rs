//! End-to-end rule scenarios through the public API.
mod common;

use common::{Script, werewolf_tables};
use game_core::{
    Character, CharacterError, CombatError, CombatOutcome, CombatView, CraftError, Encounter,
    GameConfig, GameEnv, GameError, GameEvent, GameRng, Inventory, PlayerAction, SkillKind, craft,
    run_combat,
};

fn first_round_damage(character: &Character, seed: u64) -> i32 {
    let tables = werewolf_tables();
    let config = GameConfig::default();
    let mut character = character.clone();
    let mut encounter = Encounter::begin("Goblin", &tables).unwrap();
    let mut rng = GameRng::new(seed);

    encounter
        .resolve_round(
            PlayerAction::PrimaryStrike,
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
        )
        .unwrap();
    40 - encounter.enemy().health
}

#[test]
fn primary_strike_on_goblin_deals_15_to_25() {
    let tables = werewolf_tables();
    let character = Character::new("Lycan", &tables);
    for seed in 0..200 {
        let damage = first_round_damage(&character, seed);
        assert!((15..=25).contains(&damage), "seed {seed}: {damage}");
    }
}

#[test]
fn enhanced_strength_two_shifts_the_range() {
    let tables = werewolf_tables();
    let mut character = Character::new("Lycan", &tables).with_skill_points(2);
    character
        .upgrade_skill(SkillKind::EnhancedStrength, &tables)
        .unwrap();
    character
        .upgrade_skill(SkillKind::EnhancedStrength, &tables)
        .unwrap();
    assert_eq!(character.derived_stats().attack_bonus, 10);

    for seed in 0..200 {
        let damage = first_round_damage(&character, seed);
        assert!((25..=35).contains(&damage), "seed {seed}: {damage}");
    }
}

#[test]
fn heavy_strike_recoil_wins_over_a_killing_blow() {
    let tables = werewolf_tables();
    let config = GameConfig::default();
    let mut character = Character::new("Lycan", &tables)
        .with_health(10)
        .with_skill_level(SkillKind::EnhancedStrength, 5);
    // 30 + 25 + 10 would flatten the goblin.
    let mut rng = Script::ranges([10]);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = run_combat(
        "Goblin",
        &mut character,
        GameEnv::new(&tables, &config),
        &mut rng,
        &mut |_: &CombatView<'_>| PlayerAction::HeavyStrike,
        &mut events,
    )
    .unwrap();

    assert_eq!(outcome, CombatOutcome::PlayerSelfInflictedDefeat);
    assert!(outcome.is_game_over());
    assert!(!events.iter().any(|event| matches!(event, GameEvent::EnemyDefeated { .. })));
    assert_eq!(events.last(), Some(&GameEvent::PlayerSelfDefeated));
    assert_eq!(character.experience(), 0);
    assert!(rng.is_spent());
}

#[test]
fn nothing_resolves_after_the_player_falls() {
    let tables = werewolf_tables();
    let config = GameConfig::default();
    let mut character = Character::new("Lycan", &tables).with_health(30);
    // Round 1: strike 20, wolf bites 25. Round 2: strike 20, wolf bites again.
    let mut rng = Script::ranges([0, 0, 0, 0]);
    let mut rounds = 0;
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = run_combat(
        "Alpha Wolf",
        &mut character,
        GameEnv::new(&tables, &config),
        &mut rng,
        &mut |_: &CombatView<'_>| {
            rounds += 1;
            PlayerAction::PrimaryStrike
        },
        &mut events,
    )
    .unwrap();

    assert_eq!(outcome, CombatOutcome::PlayerDefeated);
    assert_eq!(rounds, 2);
    assert_eq!(character.health(), -20);
    assert_eq!(events.last(), Some(&GameEvent::PlayerDefeated));
    assert!(rng.is_spent());
}

#[test]
fn invalid_choice_forfeits_but_the_enemy_still_acts() {
    let tables = werewolf_tables();
    let config = GameConfig::default();
    let mut character = Character::new("Lycan", &tables);
    let mut encounter = Encounter::begin("Hunter", &tables).unwrap();
    let mut rng = Script::ranges([0]);

    let report = encounter
        .resolve_round(
            PlayerAction::Invalid,
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
        )
        .unwrap();

    assert_eq!(report.events.first(), Some(&GameEvent::TurnForfeited));
    assert_eq!(encounter.enemy().health, 60);
    assert_eq!(character.health(), 80);
}

#[test]
fn crafting_strong_potion_without_herb_fails_cleanly() {
    let tables = werewolf_tables();
    let mut inventory = Inventory::from_items(["Healing Potion"]);

    let err = craft("Strong Healing Potion", &mut inventory, &tables).unwrap_err();
    assert_eq!(
        err,
        CraftError::MissingIngredients {
            recipe: "Strong Healing Potion".to_string(),
            missing: vec!["Sacred Herb".to_string()],
        }
    );
    assert_eq!(inventory.items(), &["Healing Potion".to_string()][..]);
}

#[test]
fn maxed_skill_keeps_its_point() {
    let tables = werewolf_tables();
    let mut character = Character::new("Lycan", &tables)
        .with_skill_level(SkillKind::Stealth, 3)
        .with_skill_points(1);

    let err = character.upgrade_skill(SkillKind::Stealth, &tables).unwrap_err();
    assert_eq!(
        err,
        CharacterError::SkillMaxed {
            skill: SkillKind::Stealth,
            max_level: 3
        }
    );
    assert_eq!(character.skill_points(), 1);
    assert_eq!(character.derived_stats().stealth_bonus, 30);
}

#[test]
fn same_seed_replays_the_same_fight() {
    let tables = werewolf_tables();
    let config = GameConfig::default();

    let fight = |seed: u64| {
        let mut character = Character::new_game("Lycan", GameEnv::new(&tables, &config));
        let mut rng = GameRng::new(seed);
        let mut events: Vec<GameEvent> = Vec::new();
        let outcome = run_combat(
            "Hunter",
            &mut character,
            GameEnv::new(&tables, &config),
            &mut rng,
            &mut |view: &CombatView<'_>| {
                if view.round % 3 == 0 {
                    PlayerAction::Evade
                } else {
                    PlayerAction::PrimaryStrike
                }
            },
            &mut events,
        )
        .unwrap();
        (outcome, events, character)
    };

    assert_eq!(fight(7), fight(7));
}

#[test]
fn victory_experience_levels_the_character() {
    let tables = werewolf_tables();
    let config = GameConfig::default();
    let mut character = Character::new("Lycan", &tables).with_progress(1, 50);
    // Strike 20, goblin slashes for 15, strike 20 finishes it.
    let mut rng = Script::ranges([0, 0, 0]);
    let mut events: Vec<GameEvent> = Vec::new();

    let outcome = run_combat(
        "Goblin",
        &mut character,
        GameEnv::new(&tables, &config),
        &mut rng,
        &mut |_: &CombatView<'_>| PlayerAction::PrimaryStrike,
        &mut events,
    )
    .unwrap();

    assert_eq!(outcome, CombatOutcome::PlayerVictory);
    assert!(events.contains(&GameEvent::LeveledUp {
        level: 2,
        skill_points: 1
    }));
    assert_eq!(character.level(), 2);
    assert_eq!(character.experience(), 0);
    assert_eq!(character.health(), 85);
}

#[test]
fn every_rule_error_lets_the_session_continue() {
    let errors: Vec<Box<dyn GameError>> = vec![
        Box::new(CharacterError::ItemNotOwned {
            item: "Moonstone".to_string(),
        }),
        Box::new(CharacterError::ItemNotUsable {
            item: "Gold".to_string(),
        }),
        Box::new(CraftError::UnknownRecipe("Moon Blade".to_string())),
        Box::new(CraftError::MissingIngredients {
            recipe: "Silver Sword".to_string(),
            missing: vec!["Wolf Fang".to_string()],
        }),
        Box::new(CharacterError::NoSkillPoints),
        Box::new(CharacterError::SkillMaxed {
            skill: SkillKind::Stealth,
            max_level: 3,
        }),
        Box::new(CombatError::UnknownEnemyType("Dragon".to_string())),
        Box::new(CombatError::InvalidActionSelector("9".to_string())),
        Box::new(CombatError::Abandoned { round: 3 }),
    ];

    for error in &errors {
        assert!(error.is_recoverable(), "{} ({})", error, error.error_code());
    }
    assert!(!CombatError::EncounterFinished.is_recoverable());
}
