//! In-memory SaveRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::CharacterRecord;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// In-memory implementation of SaveRepository.
pub struct InMemorySaveRepository {
    records: RwLock<HashMap<String, CharacterRecord>>,
}

impl InMemorySaveRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create with a record already stored in `slot`.
    pub fn with_record(slot: impl Into<String>, record: CharacterRecord) -> Self {
        let mut records = HashMap::new();
        records.insert(slot.into(), record);
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for InMemorySaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveRepository for InMemorySaveRepository {
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(slot.to_string(), record.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(slot).cloned())
    }

    fn exists(&self, slot: &str) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(slot))
            .unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.remove(slot);
        Ok(())
    }
}
