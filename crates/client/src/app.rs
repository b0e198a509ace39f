//! Menu loop tying the console to a runtime session.
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use game_content::GameContent;
use game_core::{ContentTables, ForestApproach, GameConfig};
use runtime::{RuntimeError, SaveRepository, Session};
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::console::Console;
use crate::input::{
    ConsoleActions, ConsoleEvents, MenuChoice, Selection, is_cancel, is_yes, parse_selection,
};
use crate::presentation;

/// Name given to a new character when input ends before one is typed.
const FALLBACK_NAME: &str = "Wanderer";

pub struct App<R, W> {
    session: Session,
    console: RefCell<Console<R, W>>,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Greets the player and either restores the saved character or starts a
    /// new game.
    pub fn start(
        content: GameContent,
        config: &CliConfig,
        repository: Arc<dyn SaveRepository>,
        mut console: Console<R, W>,
    ) -> Result<Self> {
        let GameContent { tables, config: game } = content;
        let tables = Arc::new(tables);
        let slot = config.runtime.save_slot.clone();

        console.say(presentation::WELCOME)?;

        let mut restored = None;
        if repository.exists(&slot) {
            console.say("Load saved game? (y/n)")?;
            if console.ask()?.as_deref().is_some_and(is_yes) {
                restored = restore(
                    &mut console,
                    tables.clone(),
                    game.clone(),
                    config,
                    repository.clone(),
                )?;
            }
        }

        let session = match restored {
            Some(session) => session,
            None => {
                let name = match &config.player_name {
                    Some(name) => name.clone(),
                    None => ask_name(&mut console)?,
                };
                let session = Session::new_game(
                    name,
                    tables,
                    game,
                    config.runtime.rng(),
                    repository,
                    slot,
                );
                console.say(presentation::welcome_new(session.character()))?;
                session
            }
        };

        Ok(Self {
            session,
            console: RefCell::new(console),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the main menu until the player quits, input ends, or the game is over.
    pub fn run(&mut self) -> Result<()> {
        while !self.session.is_over() {
            self.say_all(presentation::status(self.session.character()))?;
            self.say_all(presentation::main_menu())?;

            let Some(line) = self.ask()? else {
                info!("Input closed");
                self.say(presentation::GOODBYE)?;
                break;
            };

            match MenuChoice::from_choice(&line) {
                Some(MenuChoice::Craft) => self.craft()?,
                Some(MenuChoice::UseItem) => self.use_item()?,
                Some(MenuChoice::UpgradeSkills) => self.upgrade_skills()?,
                Some(MenuChoice::ForestQuest) => self.forest_quest()?,
                Some(MenuChoice::Save) => self.save()?,
                Some(MenuChoice::Quit) => {
                    self.say(presentation::GOODBYE)?;
                    break;
                }
                None => self.say("Invalid choice.")?,
            }
        }

        info!(
            over = self.session.is_over(),
            level = self.session.character().level(),
            "Session finished"
        );
        Ok(())
    }

    fn craft(&mut self) -> Result<()> {
        self.say_all(presentation::recipe_list(self.session.tables()))?;
        let Some(line) = self.ask()? else {
            return Ok(());
        };

        let recipes = self.session.tables().recipes();
        let recipe = match parse_selection(&line, recipes.len()) {
            Ok(Selection::Cancel) => return Ok(()),
            Ok(Selection::Pick(index)) => recipes[index].output.clone(),
            Err(e) => return self.say(e.to_string()),
        };

        match self.session.craft(&recipe) {
            Ok(crafted) => self.say(presentation::crafted(&crafted)),
            Err(e) => self.report(e),
        }
    }

    fn use_item(&mut self) -> Result<()> {
        self.say("Type item name to use or 'cancel':")?;
        let Some(item) = self.ask()?.filter(|line| !is_cancel(line)) else {
            return Ok(());
        };

        match self.session.use_item(&item) {
            Ok(used) => self.say(presentation::item_used(&used)),
            Err(e) => self.report(e),
        }
    }

    fn upgrade_skills(&mut self) -> Result<()> {
        let skill_points = self.session.character().skill_points();
        let tree = self.session.skill_tree();
        let skills: Vec<_> = tree.iter().map(|entry| entry.skill).collect();
        self.say_all(presentation::skill_tree(&tree, skill_points))?;

        if skill_points == 0 {
            return Ok(());
        }

        self.say("Enter skill number to upgrade, or 0 to cancel:")?;
        let Some(line) = self.ask()? else {
            return Ok(());
        };

        let skill = match parse_selection(&line, skills.len()) {
            Ok(Selection::Cancel) => return Ok(()),
            Ok(Selection::Pick(index)) => skills[index],
            Err(e) => return self.say(e.to_string()),
        };

        match self.session.upgrade_skill(skill) {
            Ok(upgrade) => self.say(presentation::skill_upgraded(&upgrade)),
            Err(e) => self.report(e),
        }
    }

    fn forest_quest(&mut self) -> Result<()> {
        self.say_all(presentation::forest_intro())?;
        let Some(line) = self.ask()? else {
            return Ok(());
        };
        let approach = ForestApproach::from_choice(&line);

        let outcome = match self.session.approach_forest(approach) {
            Ok(outcome) => outcome,
            Err(e) => return self.report(e),
        };
        self.say_all(presentation::describe_forest(&outcome))?;

        if outcome.requires_combat() {
            let enemy = self.session.config().quest_enemy.clone();
            self.fight(&enemy)?;
        }
        Ok(())
    }

    fn fight(&mut self, enemy: &str) -> Result<()> {
        let result = self.session.fight(
            enemy,
            &mut ConsoleActions(&self.console),
            &mut ConsoleEvents(&self.console),
        );

        match result {
            Ok(outcome) if outcome.is_game_over() => self.say(presentation::GAME_OVER),
            Ok(_) => Ok(()),
            Err(e) => self.report(e),
        }
    }

    fn save(&mut self) -> Result<()> {
        match self.session.save() {
            Ok(()) => self.say("Game saved."),
            Err(e) => self.report(e),
        }
    }

    fn report(&self, error: RuntimeError) -> Result<()> {
        if !error.is_recoverable() {
            warn!("Operation failed: {}", error);
        }
        self.say(presentation::sentence(&error))
    }

    fn say(&self, line: impl AsRef<str>) -> Result<()> {
        Ok(self.console.borrow_mut().say(line)?)
    }

    fn say_all(&self, lines: Vec<String>) -> Result<()> {
        Ok(self.console.borrow_mut().say_all(lines)?)
    }

    fn ask(&self) -> Result<Option<String>> {
        Ok(self.console.borrow_mut().ask()?)
    }
}

fn restore<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tables: Arc<ContentTables>,
    game: GameConfig,
    config: &CliConfig,
    repository: Arc<dyn SaveRepository>,
) -> Result<Option<Session>> {
    let slot = config.runtime.save_slot.clone();
    match Session::restore(tables, game, config.runtime.rng(), repository, slot) {
        Ok(Some(session)) => {
            console.say(presentation::welcome_back(session.character()))?;
            Ok(Some(session))
        }
        Ok(None) => {
            console.say("No save found.")?;
            console.say("Starting new game...")?;
            Ok(None)
        }
        Err(e) => {
            warn!("Save could not be restored: {}", e);
            console.say(presentation::sentence(&e))?;
            console.say("Starting new game...")?;
            Ok(None)
        }
    }
}

fn ask_name<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    console.say("Enter your name:")?;
    let name = console
        .ask()?
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_NAME.to_string());
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::ContentFactory;
    use game_core::{Character, SkillKind};
    use runtime::{DEFAULT_SLOT, InMemorySaveRepository};

    fn config() -> CliConfig {
        let mut config = CliConfig::default();
        config.runtime.seed = Some(4);
        config
    }

    fn play(input: &str, repository: Arc<dyn SaveRepository>) -> (String, Session) {
        let content = ContentFactory::builtin().unwrap();
        let mut out = Vec::new();
        let session = {
            let console = Console::new(input.as_bytes(), &mut out, "> ");
            let mut app = App::start(content, &config(), repository, console).unwrap();
            app.run().unwrap();
            app.session
        };
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn new_game_crafts_and_quits() {
        let (text, session) = play("Selene\n1\n2\n6\n", Arc::new(InMemorySaveRepository::new()));

        assert!(text.contains("Welcome, Selene. Your curse awaits..."));
        assert!(text.contains("1. Silver Sword requires Silver Dagger, Enchanted Wood, Wolf Fang"));
        assert!(text.contains("You crafted Strong Healing Potion!"));
        assert!(text.ends_with("Goodbye!\n"));
        assert!(session.character().inventory().contains("Strong Healing Potion"));
    }

    #[test]
    fn invalid_entries_are_reported() {
        let (text, _) = play(
            "Selene\n9\n1\nx\n2\nMoonstone\n3\n",
            Arc::new(InMemorySaveRepository::new()),
        );

        assert!(text.contains("Invalid choice."));
        assert!(text.contains("Invalid input."));
        assert!(text.contains("You don't have Moonstone."));
        assert!(text.contains("You have 0 skill point(s) available."));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn save_then_load_on_the_next_start() {
        let repository: Arc<dyn SaveRepository> = Arc::new(InMemorySaveRepository::new());
        let (text, _) = play("Selene\n2\nHealing Potion\n5\n6\n", repository.clone());
        assert!(text.contains("You use Healing Potion, healing 30 health. Current health: 100."));
        assert!(text.contains("Game saved."));
        assert!(repository.exists(DEFAULT_SLOT));

        let (text, session) = play("y\n6\n", repository);
        assert!(text.contains("Load saved game? (y/n)"));
        assert!(text.contains("Welcome back, Selene. Level 1, Health 100."));
        assert!(!session.character().inventory().contains("Healing Potion"));
    }

    #[test]
    fn declining_the_save_starts_over() {
        let tables = ContentFactory::builtin().unwrap().tables;
        let saved = Character::new("Old", &tables).with_skill_points(2);
        let repository = Arc::new(InMemorySaveRepository::with_record(
            DEFAULT_SLOT,
            saved.to_record(),
        ));

        let (text, session) = play("n\nNew\n6\n", repository);
        assert!(text.contains("Welcome, New."));
        assert_eq!(session.character().skill_points(), 0);
    }

    #[test]
    fn skill_upgrade_through_the_menu() {
        let tables = ContentFactory::builtin().unwrap().tables;
        let saved = Character::new("Selene", &tables).with_skill_points(1);
        let repository = Arc::new(InMemorySaveRepository::with_record(
            DEFAULT_SLOT,
            saved.to_record(),
        ));

        let (text, session) = play("y\n3\n4\n6\n", repository);
        assert!(text.contains("Upgraded Stealth to level 1!"));
        assert_eq!(session.character().skill_level(SkillKind::Stealth), 1);
    }

    #[test]
    fn closed_input_ends_the_game_quietly() {
        let (text, session) = play("", Arc::new(InMemorySaveRepository::new()));
        assert!(text.contains("Welcome, Wanderer."));
        assert!(text.ends_with("Goodbye!\n"));
        assert!(!session.is_over());
    }

    #[test]
    fn forest_fight_until_the_end() {
        let tables = ContentFactory::builtin().unwrap().tables;
        let weak = Character::new("Selene", &tables).with_health(5);
        let repository = Arc::new(InMemorySaveRepository::with_record(
            DEFAULT_SLOT,
            weak.to_record(),
        ));

        // Bite at 5 health: the recoil is fatal whatever the roll.
        let (text, session) = play("y\n4\n1\n2\n", repository);
        assert!(text.contains("You decide to fight!"));
        assert!(text.contains("A Alpha Wolf appears! Prepare to fight!"));
        assert!(text.contains("You hurt yourself fatally with the bite!"));
        assert!(text.ends_with("GAME OVER\n"));
        assert!(session.is_over());
    }

    #[test]
    fn input_ending_mid_fight_quits_instead_of_dying() {
        let (text, session) = play("Selene\n4\n1\n", Arc::new(InMemorySaveRepository::new()));

        assert!(text.contains("A Alpha Wolf appears! Prepare to fight!"));
        assert!(text.contains("You slip away from the fight in round 1."));
        assert!(!text.contains("GAME OVER"));
        assert!(text.ends_with("Goodbye!\n"));
        assert!(!session.is_over());
        assert_eq!(session.character().health(), 100);
    }

    #[test]
    fn input_ending_at_the_forest_path_skips_the_fight() {
        let (text, session) = play("Selene\n4\n", Arc::new(InMemorySaveRepository::new()));

        assert!(!text.contains("appears!"));
        assert!(text.ends_with("Goodbye!\n"));
        assert!(!session.is_over());
    }
}
