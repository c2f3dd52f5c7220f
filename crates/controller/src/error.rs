//! Error types for the controller layer
//!
//! Gameplay operations keep the quiet `bool`/`Option` style of the engine.
//! Only operations that touch the filesystem or parse input return these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialise game: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// No saved game under this id
    #[error("Game not found: {id}")]
    GameNotFound { id: String },

    /// Save requested while no game is running
    #[error("No active game to save")]
    NoActiveGame,

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl ControllerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ControllerError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;
