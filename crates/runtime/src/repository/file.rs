//! File-based SaveRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::CharacterRecord;

use crate::repository::{RepositoryError, Result, SaveRepository};

/// File-based implementation of SaveRepository.
///
/// # File Format
///
/// Each slot is stored as `{slot}.json`, a pretty-printed JSON object with the
/// fields of [`CharacterRecord`]. Writes go to a temp file first and are
/// moved into place with a rename, so a crash never leaves a half-written save.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create a new file-based save repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a save file.
    pub fn slot_path(&self, slot: &str) -> Result<PathBuf> {
        let valid = !slot.is_empty()
            && slot
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidSlot(slot.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", slot)))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, record: &CharacterRecord) -> Result<()> {
        let path = self.slot_path(slot)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved slot[{}] to {}", slot, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<CharacterRecord>> {
        let path = self.slot_path(slot)?;

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Anything without a version is not one of our saves.
        if value.get("version").and_then(|v| v.as_u64()).is_none() {
            return Err(RepositoryError::CorruptedData(format!(
                "{} has no record version",
                path.display()
            )));
        }

        let record: CharacterRecord =
            serde_json::from_value(value).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded slot[{}] from {}", slot, path.display());

        Ok(Some(record))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).map(|path| path.exists()).unwrap_or(false)
    }

    fn delete(&self, slot: &str) -> Result<()> {
        let path = self.slot_path(slot)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted slot[{}]", slot);
        }

        Ok(())
    }
}
