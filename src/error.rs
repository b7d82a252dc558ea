//! Startup and runtime failures
//!
//! Everything here is fatal: the binary logs it and exits non-zero.
//! A full photon pool or a photon leaving the world is not an error.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::shape::ShapeError;

#[derive(Debug, Error)]
pub enum AsteroidsError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to read settings file {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
