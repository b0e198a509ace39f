//! Repository contract for saving and loading the character.

use game_core::CharacterRecord;

use super::Result;

/// Slot used when the player does not pick one.
pub const DEFAULT_SLOT: &str = "werewolf_save";

/// Persistence of character records, one per named slot.
///
/// Records are stored as-is; validating them against the reference tables
/// happens when the session restores the character.
pub trait SaveRepository: Send + Sync {
    /// Save a record, replacing whatever the slot held.
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<()>;

    /// Load the record of a slot, `None` if nothing was saved there.
    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>>;

    /// Check if a slot holds a record.
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot's record. Deleting an empty slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;
}
