//! Single-player session orchestration.
//!
//! A [`Session`] owns the live character, the shared reference tables, the
//! session's only random number generator and the save repository. Every
//! player-facing operation goes through it so game-over is enforced in one
//! place: once a combat ends in defeat, every further call fails with
//! [`RuntimeError::SessionOver`].

use std::sync::Arc;

use game_core::{
    ActionProvider, Character, CombatOutcome, ContentTables, Crafted, EventSink, ForestApproach,
    ForestOutcome, GameConfig, GameEnv, GameEvent, GameRng, ItemUse, SkillKind, SkillTreeEntry,
    SkillUpgrade, approach_forest, craft, run_combat,
};
use tracing::{debug, info, warn};

use crate::error::{Result, RuntimeError};
use crate::repository::SaveRepository;

/// Whether the session still accepts operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    GameOver,
}

/// Result of the forest quest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestReport {
    pub outcome: ForestOutcome,
    /// Set when the beast had to be fought.
    pub combat: Option<CombatOutcome>,
}

pub struct Session {
    character: Character,
    tables: Arc<ContentTables>,
    config: GameConfig,
    rng: GameRng,
    repository: Arc<dyn SaveRepository>,
    slot: String,
    status: SessionStatus,
}

impl Session {
    /// Session around an existing character.
    pub fn new(
        character: Character,
        tables: Arc<ContentTables>,
        config: GameConfig,
        rng: GameRng,
        repository: Arc<dyn SaveRepository>,
        slot: impl Into<String>,
    ) -> Self {
        let slot = slot.into();
        info!(
            name = character.name(),
            seed = rng.seed(),
            slot = slot.as_str(),
            "Session started"
        );

        Self {
            character,
            tables,
            config,
            rng,
            repository,
            slot,
            status: SessionStatus::Active,
        }
    }

    /// Session with a freshly created character.
    pub fn new_game(
        name: impl Into<String>,
        tables: Arc<ContentTables>,
        config: GameConfig,
        rng: GameRng,
        repository: Arc<dyn SaveRepository>,
        slot: impl Into<String>,
    ) -> Self {
        let character = Character::new_game(name, GameEnv::new(&tables, &config));
        Self::new(character, tables, config, rng, repository, slot)
    }

    /// Session around the character stored in `slot`, `None` when the slot is empty.
    pub fn restore(
        tables: Arc<ContentTables>,
        config: GameConfig,
        rng: GameRng,
        repository: Arc<dyn SaveRepository>,
        slot: impl Into<String>,
    ) -> Result<Option<Self>> {
        let slot = slot.into();
        let Some(record) = repository.load(&slot)? else {
            return Ok(None);
        };

        let character = Character::from_record(record, &tables)?;
        Ok(Some(Self::new(character, tables, config, rng, repository, slot)))
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Skill rows for the skill tree view.
    pub fn skill_tree(&self) -> Vec<SkillTreeEntry<'_>> {
        self.character.skill_tree(&self.tables)
    }

    /// Fights the named enemy to the end.
    pub fn fight(
        &mut self,
        enemy: &str,
        provider: &mut impl ActionProvider,
        sink: &mut impl EventSink,
    ) -> Result<CombatOutcome> {
        self.ensure_active()?;
        info!(enemy, health = self.character.health(), "Combat started");

        let env = GameEnv::new(&self.tables, &self.config);
        let mut sink = LoggedSink(sink);
        let outcome = run_combat(
            enemy,
            &mut self.character,
            env,
            &mut self.rng,
            provider,
            &mut sink,
        )
        .inspect_err(|e| warn!("Combat rejected: {}", e))?;

        self.record_outcome(enemy, outcome);
        Ok(outcome)
    }

    /// Resolves the approach to the beast without fighting it.
    ///
    /// Callers that render the outcome before the fight use this followed by
    /// [`fight`](Self::fight) against [`GameConfig::quest_enemy`].
    pub fn approach_forest(&mut self, approach: ForestApproach) -> Result<ForestOutcome> {
        self.ensure_active()?;

        let env = GameEnv::new(&self.tables, &self.config);
        let outcome = approach_forest(approach, &mut self.character, env, &mut self.rng);
        info!(%approach, ?outcome, "Forest approached");
        Ok(outcome)
    }

    /// Approaches the beast on the forest path, fighting it when needed.
    pub fn forest_quest(
        &mut self,
        approach: ForestApproach,
        provider: &mut impl ActionProvider,
        sink: &mut impl EventSink,
    ) -> Result<QuestReport> {
        let outcome = self.approach_forest(approach)?;

        let combat = if outcome.requires_combat() {
            let enemy = self.config.quest_enemy.clone();
            Some(self.fight(&enemy, provider, sink)?)
        } else {
            None
        };

        Ok(QuestReport { outcome, combat })
    }

    /// Crafts the item named by `recipe`.
    pub fn craft(&mut self, recipe: &str) -> Result<Crafted> {
        self.ensure_active()?;
        let crafted = craft(recipe, self.character.inventory_mut(), &self.tables)
            .inspect_err(|e| warn!(recipe, "Craft failed: {}", e))?;
        info!(output = crafted.output.as_str(), "Crafted");
        Ok(crafted)
    }

    /// Uses one instance of an item from the inventory.
    pub fn use_item(&mut self, item: &str) -> Result<ItemUse> {
        self.ensure_active()?;
        let env = GameEnv::new(&self.tables, &self.config);
        let used = self
            .character
            .consume_item(item, env)
            .inspect_err(|e| warn!(item, "Item use failed: {}", e))?;
        info!(item, health = used.health, "Item used");
        Ok(used)
    }

    /// Spends a skill point on `skill`.
    pub fn upgrade_skill(&mut self, skill: SkillKind) -> Result<SkillUpgrade> {
        self.ensure_active()?;
        let upgrade = self
            .character
            .upgrade_skill(skill, &self.tables)
            .inspect_err(|e| warn!(%skill, "Upgrade failed: {}", e))?;
        info!(%skill, level = upgrade.level, "Skill upgraded");
        Ok(upgrade)
    }

    /// Writes the character to the session's save slot.
    pub fn save(&self) -> Result<()> {
        self.ensure_active()?;
        self.repository
            .save(&self.slot, &self.character.to_record())?;
        info!(slot = self.slot.as_str(), "Game saved");
        Ok(())
    }

    /// Replaces the character with the one stored in the save slot.
    ///
    /// Returns `false`, leaving the character untouched, when the slot is empty.
    pub fn load(&mut self) -> Result<bool> {
        self.ensure_active()?;
        let Some(record) = self.repository.load(&self.slot)? else {
            info!(slot = self.slot.as_str(), "No save found");
            return Ok(false);
        };

        self.character = Character::from_record(record, &self.tables)?;
        info!(
            slot = self.slot.as_str(),
            name = self.character.name(),
            level = self.character.level(),
            "Game loaded"
        );
        Ok(true)
    }

    fn ensure_active(&self) -> Result<()> {
        match self.status {
            SessionStatus::Active => Ok(()),
            SessionStatus::GameOver => Err(RuntimeError::SessionOver),
        }
    }

    fn record_outcome(&mut self, enemy: &str, outcome: CombatOutcome) {
        if outcome.is_game_over() {
            self.status = SessionStatus::GameOver;
            info!(enemy, %outcome, "Game over");
        } else {
            info!(
                enemy,
                %outcome,
                level = self.character.level(),
                health = self.character.health(),
                "Combat won"
            );
        }
    }
}

/// Forwards events to the caller's sink after tracing them.
struct LoggedSink<'a, S>(&'a mut S);

impl<S: EventSink> EventSink for LoggedSink<'_, S> {
    fn emit(&mut self, event: GameEvent) {
        debug!(?event, "Combat event");
        self.0.emit(event);
    }
}
