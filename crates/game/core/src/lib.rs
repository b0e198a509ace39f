//! Deterministic rules of the werewolf adventure.
//!
//! `game-core` defines the canonical rules (character model, progression,
//! crafting, enemy AI, combat) and exposes pure APIs reused by the runtime and
//! the client. Reference data is passed in explicitly as [`ContentTables`]
//! and every random draw goes through a caller-supplied [`RngOracle`], so the
//! same seed and inputs always replay the same session.
pub mod combat;
pub mod config;
pub mod crafting;
pub mod env;
pub mod error;
pub mod event;
pub mod quest;
pub mod state;
pub mod stats;

pub use combat::{
    ActionProvider, CombatError, CombatOutcome, CombatView, EnemyAction, Encounter,
    EnemyInstance, EventSink, PlayerAction, RoundReport, run_combat,
};
pub use config::GameConfig;
pub use crafting::{CraftError, Crafted, craft};
pub use env::{
    AiPolicy, CombatTables, ContentTables, EnemyTemplate, GameEnv, GameRng, ItemCategory,
    ItemDefinition, ItemKind, Recipe, RngOracle, SkillDefinition, SkillKind, StrikeProfile,
    TablesError,
};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use quest::{AmbushReason, ForestApproach, ForestOutcome, approach_forest};
pub use state::{
    CHARACTER_RECORD_VERSION, Character, CharacterError, CharacterRecord, Inventory, ItemUse,
    RecordError, SkillLevels, SkillTreeEntry, SkillUpgrade,
};
pub use stats::{DerivedStats, ExperienceGain};
