//! Mutable player state and its persisted record.
mod character;
mod error;
mod inventory;
mod record;
mod skills;

pub use character::{Character, ItemUse, SkillTreeEntry, SkillUpgrade};
pub use error::{CharacterError, RecordError};
pub use inventory::Inventory;
pub use record::{CHARACTER_RECORD_VERSION, CharacterRecord};
pub use skills::SkillLevels;
