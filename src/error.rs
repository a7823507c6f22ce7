//! Structured error types.
//!
//! Invalid user intent (clicking an empty cell, a non-adjacent destination)
//! is never an error: the engine ignores it. These types cover contract
//! violations by the calling layer and configuration problems only.

use std::path::PathBuf;

use crate::core::Move;

/// Contract errors raised by the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("position ({row}, {col}) is outside the board")]
    InvalidPosition { row: usize, col: usize },

    #[error("illegal move {0}")]
    IllegalMove(Move),

    #[error("malformed game state: {0}")]
    MalformedState(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
