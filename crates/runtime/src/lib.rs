//! Runtime orchestration for a werewolf adventure session.
//!
//! This crate wires the pure rules of `game-core` to persistence and
//! configuration. Consumers build a [`Session`] and drive it one player
//! operation at a time; the session owns the character, the seeded RNG and
//! the save repository.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and enforces game over
//! - [`repository`] persists character records (file and memory backends)
//! - [`config`] reads runtime settings from the environment
//! - [`error`] unifies rule and storage failures
pub mod config;
pub mod error;
pub mod repository;
pub mod session;

pub use config::{RuntimeConfig, default_log_dir, default_save_dir};
pub use error::{Result, RuntimeError};
pub use repository::{
    DEFAULT_SLOT, FileSaveRepository, InMemorySaveRepository, RepositoryError, SaveRepository,
};
pub use session::{QuestReport, Session, SessionStatus};
