//! Core error types for ember-core.
//!
//! This module defines the error hierarchy using thiserror. Load-time
//! failures on persisted state deliberately do not appear here: a missing
//! or corrupt state file degrades to the default state rather than
//! surfacing an error (the engine is a best-effort tracker, not a system
//! of record).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ember-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// State store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// State store and catalog errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to write state to disk
    #[error("Failed to write state to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a catalog file
    #[error("Failed to read catalog at {path}: {source}")]
    CatalogReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("Failed to parse catalog at {path}: {source}")]
    CatalogParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serialization of state failed
    #[error("Failed to serialize state: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Completion referenced an activity not in today's selection
    #[error("Unknown activity id: {0}")]
    UnknownActivity(String),

    /// Completion recorded before any selection exists
    #[error("No daily selection has been made")]
    NoSelection,

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
