//! Error types for template loading.
//!
//! This module defines [`LoaderError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Rendering problems a theme developer should fix (an override path that
//!   does not exist, a reserved argument key) are logged warnings, not errors
//! - `LoaderError` covers what the caller cannot recover from: unreadable
//!   configuration, a failed include, an unusable cache backend
//! - Use `anyhow::Error` (via `LoaderError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template loading.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// The located template could not be included.
    #[error("Failed to include template {path}: {source}")]
    Include {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template referenced a binding that is not in its context.
    #[error("Unresolved template variable ${{{name}}} in {path}")]
    UnresolvedVariable { name: String, path: PathBuf },

    /// Cache backend failure.
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for template loading.
pub type Result<T> = std::result::Result<T, LoaderError>;
