//! Error types for the address book.
//!
//! This module defines the storage and configuration errors using `thiserror`.
//! User-facing validation errors live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur when loading or saving the directory snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or holds an invalid field
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an unknown format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    /// The snapshot parsed but breaks a directory invariant
    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
