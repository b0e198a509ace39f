//! Terminal client for the werewolf adventure.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ CliConfig      environment, `.env`
//!   ├─→ logging        per-session log file
//!   ├─→ game-content   reference tables (data dir or built-in)
//!   └─→ App            menu loop over a runtime `Session`
//!         ├─→ Console        stdin/stdout lines
//!         ├─→ input          menu parsing, combat action provider
//!         └─→ presentation   event and state rendering
//! ```
pub mod app;
pub mod config;
pub mod console;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::App;
pub use config::CliConfig;
pub use console::Console;

use anyhow::Context;
use game_content::{ContentFactory, GameContent};
use runtime::RuntimeConfig;

/// Content from the configured data directory, or the built-in content.
pub fn load_content(config: &RuntimeConfig) -> anyhow::Result<GameContent> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_all()
            .with_context(|| format!("Failed to load content from {}", dir.display())),
        None => ContentFactory::builtin().context("Built-in content is invalid"),
    }
}
