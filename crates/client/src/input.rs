//! Input processing for the terminal client.
//!
//! Maps raw lines to menu choices and adapts the [`Console`] to the combat
//! engine's [`ActionProvider`] and [`EventSink`] seams.
use std::cell::RefCell;
use std::io::{BufRead, Write};

use game_core::{ActionProvider, CombatView, EventSink, GameEvent, PlayerAction};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::presentation;

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum MenuChoice {
    #[strum(to_string = "Craft Item")]
    Craft,
    #[strum(to_string = "Use Item")]
    UseItem,
    #[strum(to_string = "Upgrade Skills")]
    UpgradeSkills,
    #[strum(to_string = "Enter Forest Quest")]
    ForestQuest,
    #[strum(to_string = "Save Game")]
    Save,
    #[strum(to_string = "Quit")]
    Quit,
}

impl MenuChoice {
    pub const MENU: [MenuChoice; 6] = [
        MenuChoice::Craft,
        MenuChoice::UseItem,
        MenuChoice::UpgradeSkills,
        MenuChoice::ForestQuest,
        MenuChoice::Save,
        MenuChoice::Quit,
    ];

    /// Accepts the entry number or its label.
    pub fn from_choice(input: &str) -> Option<Self> {
        let choice = input.trim();
        match choice.parse::<usize>() {
            Ok(number) => number
                .checked_sub(1)
                .and_then(|index| Self::MENU.get(index).copied()),
            Err(_) => Self::MENU
                .into_iter()
                .find(|entry| entry.to_string().eq_ignore_ascii_case(choice)),
        }
    }
}

/// Pick from a numbered list where `0` cancels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    /// Zero-based index into the list.
    Pick(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid input.")]
    NotANumber,
    #[error("Invalid choice.")]
    OutOfRange,
}

/// Parses a 1-based list selection against a list of `len` entries.
pub fn parse_selection(input: &str, len: usize) -> Result<Selection, SelectionError> {
    let number: usize = input
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;

    match number {
        0 => Ok(Selection::Cancel),
        n if n <= len => Ok(Selection::Pick(n - 1)),
        _ => Err(SelectionError::OutOfRange),
    }
}

pub fn is_yes(input: &str) -> bool {
    let answer = input.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

pub fn is_cancel(input: &str) -> bool {
    let answer = input.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("cancel")
}

/// Unrecognized input forfeits the round instead of re-prompting.
pub fn action_from_input(input: &str) -> PlayerAction {
    PlayerAction::from_choice(input).unwrap_or_else(|e| {
        debug!("Combat input rejected: {}", e);
        PlayerAction::Invalid
    })
}

/// Prompts the player for each combat round.
///
/// Closed input ends the fight instead of forfeiting rounds.
pub struct ConsoleActions<'a, R, W>(pub &'a RefCell<Console<R, W>>);

impl<R: BufRead, W: Write> ActionProvider for ConsoleActions<'_, R, W> {
    fn provide_action(&mut self, view: &CombatView<'_>) -> Option<PlayerAction> {
        let mut console = self.0.borrow_mut();
        let answer = console
            .say_all(presentation::combat_menu(view))
            .and_then(|()| console.ask());

        match answer {
            Ok(Some(line)) => Some(action_from_input(&line)),
            Ok(None) => {
                info!(round = view.round, "Input closed during combat");
                None
            }
            Err(e) => {
                warn!("Failed to read combat input: {}", e);
                None
            }
        }
    }
}

/// Prints combat events as they happen.
pub struct ConsoleEvents<'a, R, W>(pub &'a RefCell<Console<R, W>>);

impl<R: BufRead, W: Write> EventSink for ConsoleEvents<'_, R, W> {
    fn emit(&mut self, event: GameEvent) {
        let line = presentation::describe_event(&event);
        if let Err(e) = self.0.borrow_mut().say(line) {
            warn!("Failed to print combat event: {}", e);
        }
    }
}
