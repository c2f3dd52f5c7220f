//! Session settings loaded from TOML

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use ziffi_core::Color;

use crate::error::Result;
use crate::mode::GameMode;

/// Controller settings. Every field is optional in the file.
///
/// ```toml
/// mode = "human-vs-engine"
/// difficulty = 3
/// human_color = "w"
/// history_limit = 50
/// think_delay_ms = 500
/// think_jitter_ms = 500
/// autoplay_delay_ms = 1000
/// save_dir = "saves"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub mode: GameMode,
    /// AI tier, 0 (weakest) to 5
    pub difficulty: u8,
    pub human_color: Color,
    /// Maximum entries kept on each of the undo and redo stacks
    pub history_limit: usize,
    /// Fixed part of the pause before an AI move
    pub think_delay_ms: u64,
    /// Upper bound of the random part of the pause before an AI move
    pub think_jitter_ms: u64,
    /// Pause between turns when two engines play each other
    pub autoplay_delay_ms: u64,
    pub save_dir: PathBuf,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::HumanVsEngine,
            difficulty: 3,
            human_color: Color::White,
            history_limit: 50,
            think_delay_ms: 500,
            think_jitter_ms: 500,
            autoplay_delay_ms: 1000,
            save_dir: PathBuf::from("saves"),
        }
    }
}

impl ControllerConfig {
    /// Reads settings from `path`. A missing file gives the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Pause before an AI move: the fixed delay plus a uniform jitter.
    pub fn think_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let jitter = if self.think_jitter_ms == 0 {
            0
        } else {
            rng.gen_range(0..self.think_jitter_ms)
        };
        Duration::from_millis(self.think_delay_ms + jitter)
    }

    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
