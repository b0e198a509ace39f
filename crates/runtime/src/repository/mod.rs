//! Repository layer for data that changes during play.
//!
//! Only the character is persisted. Static content (items, skills, enemies,
//! recipes) comes from `game-content` and never enters a save.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use memory::InMemorySaveRepository;
pub use traits::{DEFAULT_SLOT, SaveRepository};
