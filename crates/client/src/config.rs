//! Client configuration read from the environment.
use std::env;

use runtime::RuntimeConfig;

/// Prompt printed before every line of input.
pub const DEFAULT_PROMPT: &str = "> ";

/// Configuration of the terminal client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub runtime: RuntimeConfig,
    pub prompt: String,
    /// Skips the name question of a new game when set.
    pub player_name: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            prompt: DEFAULT_PROMPT.to_string(),
            player_name: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (on top of the ones read by [`RuntimeConfig`]):
    /// - `WEREWOLF_PROMPT` - Input prompt (default: `"> "`)
    /// - `WEREWOLF_PLAYER_NAME` - Character name for new games (default: asked)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(prompt) = lookup("WEREWOLF_PROMPT") {
            config.prompt = prompt;
        }

        config.player_name = lookup("WEREWOLF_PLAYER_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        config
    }
}
