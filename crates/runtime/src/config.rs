//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameRng;

use crate::repository::DEFAULT_SLOT;

/// Settings of one play session.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Fixed RNG seed; a fresh random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Directory holding save files.
    pub save_dir: PathBuf,
    /// Directory with content data files; the built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Session identifier used for log file names.
    pub session_id: Option<String>,
    /// Save slot the session reads and writes.
    pub save_slot: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            save_dir: default_save_dir(),
            data_dir: None,
            session_id: None,
            save_slot: DEFAULT_SLOT.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WEREWOLF_SEED` - Fixed RNG seed (default: random)
    /// - `WEREWOLF_SAVE_DIR` - Directory for save files (default: platform-specific)
    /// - `WEREWOLF_DATA_DIR` - Content data directory (default: built-in content)
    /// - `WEREWOLF_SESSION_ID` - Session identifier for logs (default: timestamp)
    /// - `WEREWOLF_SAVE_SLOT` - Save slot name (default: `werewolf_save`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = lookup("WEREWOLF_SEED").and_then(|seed| seed.trim().parse().ok());

        if let Some(dir) = lookup("WEREWOLF_SAVE_DIR").filter(|dir| !dir.is_empty()) {
            config.save_dir = PathBuf::from(dir);
        }

        config.data_dir = lookup("WEREWOLF_DATA_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config.session_id = lookup("WEREWOLF_SESSION_ID").filter(|id| !id.is_empty());

        if let Some(slot) = lookup("WEREWOLF_SAVE_SLOT").filter(|slot| !slot.is_empty()) {
            config.save_slot = slot;
        }

        config
    }

    /// The session's random number generator.
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// Platform-specific data directory for saves.
///
/// - macOS: `~/Library/Application Support/werewolf`
/// - Linux: `~/.local/share/werewolf` (or `$XDG_DATA_HOME/werewolf`)
/// - Windows: `%APPDATA%\werewolf`
/// - Fallback: `./save_data`
pub fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "werewolf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform-specific cache directory for logs.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "werewolf")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/werewolf"))
        .join("logs")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use game_core::RngOracle;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_every_variable() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("WEREWOLF_SEED", "42"),
            ("WEREWOLF_SAVE_DIR", "/tmp/saves"),
            ("WEREWOLF_DATA_DIR", "/tmp/data"),
            ("WEREWOLF_SESSION_ID", "night_one"),
            ("WEREWOLF_SAVE_SLOT", "alt"),
        ]));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.save_dir, PathBuf::from("/tmp/saves"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/data")));
        assert_eq!(config.session_id.as_deref(), Some("night_one"));
        assert_eq!(config.save_slot, "alt");
    }

    #[test]
    fn defaults_when_unset_or_invalid() {
        let config = RuntimeConfig::from_lookup(lookup(&[("WEREWOLF_SEED", "full moon")]));

        assert_eq!(config.seed, None);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.save_slot, DEFAULT_SLOT);
        assert_eq!(config.save_dir, default_save_dir());
    }

    #[test]
    fn fixed_seed_gives_a_replayable_rng() {
        let config = RuntimeConfig::from_lookup(lookup(&[("WEREWOLF_SEED", "7")]));
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.seed(), 7);
        assert_eq!(a.range(0, 1000), b.range(0, 1000));
    }
}
