//! Error types for the gating overlay.

use std::path::PathBuf;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Task load error: {0}")]
    Load(#[from] LoadError),

    #[error("Gating error: {0}")]
    Gate(#[from] GateError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Task loader errors.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Task file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Task file {path} contains no tasks")]
    Empty { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gating errors surfaced to the caller. A worker that requires bootstrap
/// but cannot receive it must not proceed, so these abort the cycle.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("Failed to load prerequisite block for worker {worker}: {source}")]
    PrerequisiteLoad {
        worker: String,
        #[source]
        source: LoadError,
    },

    #[error("Base scheduler error: {0}")]
    Base(String),
}

/// Fact resolution errors. Recovered locally: an unresolvable worker is
/// classified as not requiring the prerequisite.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    #[error("No facts available for worker {worker}")]
    Unresolvable { worker: String },

    #[error("Fact backend error: {0}")]
    Backend(String),
}

/// Transport session errors. Recovered locally: reset failures are logged
/// and discarded, never retried.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session reset failed: {0}")]
    ResetFailed(String),

    #[error("Session already closed")]
    Closed,
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
