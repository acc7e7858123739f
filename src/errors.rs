//! Unified application error type.
//! All modules (db, core, export, cli) return AppError so that every
//! failure reaches the user through the same path in `main`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Database unavailable at {path}: {reason}")]
    StoreUnavailable { path: String, reason: String },

    #[error("Database is not open")]
    StoreClosed,

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Export / share
    // ---------------------------
    #[error("Export medium not available: {medium}")]
    MediumUnavailable { medium: String },

    #[error("Problem writing {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("Share failed: {0}")]
    Share(String),

    // ---------------------------
    // Parsing
    // ---------------------------
    #[error("Invalid timestamp (expected YYYY-MM-DD HH:MM): {0}")]
    InvalidTimestamp(String),

    // ---------------------------
    // Config / serialization
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
