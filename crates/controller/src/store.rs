//! Saved games and where they live

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use ziffi_core::GameState;

use crate::error::{ControllerError, Result};
use crate::mode::{GameMode, PlayerColors};

const FILE_PREFIX: &str = "ziffi_chess_game_";
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// A game as written to a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub game_id: String,
    pub game_state: GameState,
    pub game_mode: Option<GameMode>,
    pub difficulty: u8,
    pub player_colors: PlayerColors,
    pub created_at: DateTime<Utc>,
    pub saved_at: DateTime<Utc>,
}

/// `ziffi_<unix millis>_<9 random lowercase alphanumerics>`
pub fn new_game_id<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("ziffi_{}_{}", now.timestamp_millis(), suffix)
}

/// Ids end up in file names, so only `[A-Za-z0-9_-]` is accepted.
fn check_id(id: &str) -> Result<()> {
    if id.is_empty()
        || !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ControllerError::invalid(format!("bad game id: {id:?}")));
    }
    Ok(())
}

pub trait GameStore {
    fn save(&mut self, game: &SavedGame) -> Result<()>;

    fn load(&self, id: &str) -> Result<SavedGame>;

    /// Ids of every stored game, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// One pretty-printed JSON file per game in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{FILE_PREFIX}{id}.json"))
    }
}

impl GameStore for FileStore {
    fn save(&mut self, game: &SavedGame) -> Result<()> {
        check_id(&game.game_id)?;
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&game.game_id);
        let json = serde_json::to_string_pretty(game)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "game written");
        Ok(())
    }

    fn load(&self, id: &str) -> Result<SavedGame> {
        check_id(id)?;
        let path = self.path_for(id);
        if !path.exists() {
            return Err(ControllerError::GameNotFound { id: id.to_string() });
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if let Some(id) = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(".json"))
            {
                ids.push(id.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// Keeps serialised games in memory. Used by tests and short sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    games: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn save(&mut self, game: &SavedGame) -> Result<()> {
        check_id(&game.game_id)?;
        self.games
            .insert(game.game_id.clone(), serde_json::to_string(game)?);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<SavedGame> {
        let json = self
            .games
            .get(id)
            .ok_or_else(|| ControllerError::GameNotFound { id: id.to_string() })?;
        Ok(serde_json::from_str(json)?)
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut ids: Vec<String> = self.games.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
