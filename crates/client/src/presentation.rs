//! Text rendering of game state, events and errors.
//!
//! Everything here is a pure function returning the lines to print, so the
//! wording can be tested without a terminal.
use std::fmt::Display;

use game_core::{
    AmbushReason, Character, CombatView, ContentTables, Crafted, ForestApproach, ForestOutcome,
    GameEvent, ItemUse, PlayerAction, SkillTreeEntry, SkillUpgrade,
};

use crate::input::MenuChoice;

pub const WELCOME: &str = "Welcome to Werewolf Adventure!";
pub const GOODBYE: &str = "Goodbye!";
pub const GAME_OVER: &str = "GAME OVER";

pub fn status(character: &Character) -> Vec<String> {
    let inventory = if character.inventory().is_empty() {
        "(empty)".to_string()
    } else {
        character.inventory().items().join(", ")
    };

    vec![
        String::new(),
        format!(
            "Health: {} | Level: {} | XP: {} | Skill Points: {}",
            character.health(),
            character.level(),
            character.experience(),
            character.skill_points()
        ),
        format!("Inventory: {}", inventory),
    ]
}

pub fn main_menu() -> Vec<String> {
    let mut lines = vec![String::new(), "Actions:".to_string()];
    lines.extend(numbered(MenuChoice::MENU.iter().map(ToString::to_string)));
    lines
}

pub fn recipe_list(tables: &ContentTables) -> Vec<String> {
    let mut lines = vec!["Available recipes:".to_string()];
    lines.extend(numbered(tables.recipes().iter().map(|recipe| {
        format!("{} requires {}", recipe.output, recipe.ingredients.join(", "))
    })));
    lines.push("Enter the number of the item you want to craft or 0 to cancel:".to_string());
    lines
}

pub fn crafted(crafted: &Crafted) -> String {
    format!("You crafted {}!", crafted.output)
}

pub fn item_used(used: &ItemUse) -> String {
    format!(
        "You use {}, healing {} health. Current health: {}.",
        used.item, used.heal_amount, used.health
    )
}

pub fn skill_tree(entries: &[SkillTreeEntry<'_>], skill_points: u32) -> Vec<String> {
    let mut lines = vec![String::new(), "Your Skill Tree:".to_string()];
    lines.extend(numbered(entries.iter().map(|entry| {
        format!(
            "{} (Level {}/{}): {}",
            entry.skill, entry.level, entry.max_level, entry.description
        )
    })));
    lines.push(format!(
        "You have {} skill point(s) available.",
        skill_points
    ));
    lines
}

pub fn skill_upgraded(upgrade: &SkillUpgrade) -> String {
    format!("Upgraded {} to level {}!", upgrade.skill, upgrade.level)
}

pub fn welcome_new(character: &Character) -> String {
    format!("Welcome, {}. Your curse awaits...", character.name())
}

pub fn welcome_back(character: &Character) -> String {
    format!(
        "Welcome back, {}. Level {}, Health {}.",
        character.name(),
        character.level(),
        character.health()
    )
}

pub fn combat_menu(view: &CombatView<'_>) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "Your Health: {} | Enemy Health: {}",
            view.player_health, view.enemy_health
        ),
        "Choose your attack:".to_string(),
    ];
    lines.extend(numbered(
        PlayerAction::MENU
            .iter()
            .map(|action| format!("{} ({})", action, action.hint())),
    ));
    lines
}

pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::EncounterStarted { enemy, .. } => {
            format!("A {} appears! Prepare to fight!", enemy)
        }
        GameEvent::PlayerStruck {
            action: PlayerAction::PrimaryStrike,
            damage,
        } => format!("You swipe your claws dealing {} damage!", damage),
        GameEvent::PlayerStruck {
            action: PlayerAction::HeavyStrike,
            damage,
        } => format!("You bite fiercely dealing {} damage!", damage),
        GameEvent::PlayerStruck { action, damage } => {
            format!("Your {} deals {} damage!", action, damage)
        }
        GameEvent::HeavyStrikeRecoil { cost, health } => {
            format!("The bite costs you {} health. Health now {}.", cost, health)
        }
        GameEvent::EvadeStance => "You prepare to evade the next attack.".to_string(),
        GameEvent::TurnForfeited => "Invalid attack choice. You lose your turn.".to_string(),
        GameEvent::EnemyDefeated { enemy } => format!("You defeated the {}!", enemy),
        GameEvent::ExperienceGained { amount } => format!("You gain {} XP!", amount),
        GameEvent::LeveledUp {
            level,
            skill_points,
        } => format!(
            "Level up! You are now level {}. You have {} skill point(s).",
            level, skill_points
        ),
        GameEvent::VictoryHeal { amount, health } => format!(
            "Your healing factor restores {} health. Health now {}.",
            amount, health
        ),
        GameEvent::EnemyHeldBack { enemy } => {
            format!("The {} is cautious and does not attack this turn.", enemy)
        }
        GameEvent::EnemyAttacked { enemy, attack, .. } => {
            format!("The {} uses {}!", enemy, attack)
        }
        GameEvent::EvadeSucceeded => "You successfully evade the attack!".to_string(),
        GameEvent::EvadeFailed => "You fail to evade!".to_string(),
        GameEvent::DamageTaken { damage, health } => {
            format!("You take {} damage. Health now {}.", damage, health)
        }
        GameEvent::PlayerDefeated => "You have been defeated in battle...".to_string(),
        GameEvent::PlayerSelfDefeated => "You hurt yourself fatally with the bite!".to_string(),
    }
}

pub fn forest_intro() -> Vec<String> {
    let mut lines = vec![
        "You enter the dark forest and see a large beast blocking your path.".to_string(),
        "Options:".to_string(),
    ];
    lines.extend(numbered(
        ForestApproach::MENU
            .iter()
            .map(|approach| format!("{}.", approach)),
    ));
    lines
}

pub fn describe_forest(outcome: &ForestOutcome) -> Vec<String> {
    let lines: &[&str] = match outcome {
        ForestOutcome::SneakedPast => &["You successfully sneak past the beast unnoticed."],
        ForestOutcome::Ambushed(AmbushReason::ChoseToFight) => &["You decide to fight!"],
        ForestOutcome::Ambushed(AmbushReason::SneakFailed) => {
            &["You fail to sneak past. The beast attacks!"]
        }
        ForestOutcome::Ambushed(AmbushReason::NoStealth) => &[
            "You don't have the Stealth skill to attempt this.",
            "The beast attacks!",
        ],
        ForestOutcome::Ambushed(AmbushReason::Prepared(potion)) => {
            return vec![
                format!("You drink the {}. Health now {}.", potion.item, potion.health),
                "Feeling rejuvenated, you prepare for battle.".to_string(),
            ];
        }
        ForestOutcome::Ambushed(AmbushReason::NoPotion) => {
            &["You have no Healing Potion! The beast attacks!"]
        }
        ForestOutcome::Ambushed(AmbushReason::Hesitated) => {
            &["Indecision costs you dearly. The beast attacks!"]
        }
    };
    lines.iter().map(|line| line.to_string()).collect()
}

/// Renders an error message as a sentence.
pub fn sentence(error: &impl Display) -> String {
    let text = error.to_string();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return text;
    };

    let mut sentence: String = first.to_uppercase().chain(chars).collect();
    if !sentence.ends_with(['.', '!', '?']) {
        sentence.push('.');
    }
    sentence
}

fn numbered(entries: impl IntoIterator<Item = String>) -> impl Iterator<Item = String> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry))
}
