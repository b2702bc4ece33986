//! Error types for Roofline operations.
//!
//! This module defines [`RooflineError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RooflineError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RooflineError::Other`) for unexpected errors
//! - Store mutations never return errors; degraded persistence is logged instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Roofline operations.
#[derive(Debug, Error)]
pub enum RooflineError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The API has no property with this id.
    #[error("Property not found: {id}")]
    PropertyNotFound { id: String },

    /// The API rejected the bearer token (HTTP 401).
    #[error("Not authorized: log in again to refresh your token")]
    Unauthorized,

    /// Any other non-success API response.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// A request payload or argument failed validation before sending.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A durable storage backend failed.
    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Roofline operations.
pub type Result<T> = std::result::Result<T, RooflineError>;
