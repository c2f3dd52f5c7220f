//! Game modes and the human/AI colour assignment

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ziffi_core::Color;

use crate::error::ControllerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    HumanVsEngine,
    EngineVsEngine,
    LocalTwoPlayer,
    OnlineTwoPlayer,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::HumanVsEngine,
        GameMode::EngineVsEngine,
        GameMode::LocalTwoPlayer,
        GameMode::OnlineTwoPlayer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::HumanVsEngine => "human-vs-engine",
            GameMode::EngineVsEngine => "engine-vs-engine",
            GameMode::LocalTwoPlayer => "local-two-player",
            GameMode::OnlineTwoPlayer => "online-two-player",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "human-vs-engine" | "hve" | "pve" => Ok(GameMode::HumanVsEngine),
            "engine-vs-engine" | "eve" => Ok(GameMode::EngineVsEngine),
            "local-two-player" | "local" => Ok(GameMode::LocalTwoPlayer),
            "online-two-player" | "online" => Ok(GameMode::OnlineTwoPlayer),
            _ => Err(ControllerError::invalid(format!("unknown game mode: {s}"))),
        }
    }
}

/// Which colour the local human plays. Online saves call the other side
/// `opponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColors {
    pub human: Color,
    #[serde(alias = "opponent")]
    pub ai: Color,
}

impl PlayerColors {
    pub fn human_plays(human: Color) -> Self {
        PlayerColors {
            human,
            ai: human.other(),
        }
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.human, &mut self.ai);
    }
}

impl Default for PlayerColors {
    fn default() -> Self {
        Self::human_plays(Color::White)
    }
}
