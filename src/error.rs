//! Error types for the cable planner

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown cable type: {0}")]
    UnknownCableType(String),

    #[error("Scenario '{scenario}' has no recommended cables")]
    NoRecommendedCable { scenario: String },

    #[error("Invalid room layout {path}: {reason}")]
    Layout { path: PathBuf, reason: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
