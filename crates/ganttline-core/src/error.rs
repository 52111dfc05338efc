//! Core error types for ganttline-core.
//!
//! This module defines the error hierarchy using thiserror. The layout
//! engine itself never fails -- it substitutes defaults for bad input --
//! so errors here come from the task source, the export path, and
//! configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ganttline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Task source errors
    #[error("Task source error: {0}")]
    Source(#[from] SourceError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised while fetching or decoding the task list.
///
/// The layout engine is never invoked with partial data: callers get
/// either a fully decoded task list or one of these.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code
    #[error("Task service returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body did not decode into a task list
    #[error("Malformed task payload: {0}")]
    Malformed(String),

    /// Failed to read a local task file
    #[error("Failed to read task file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The endpoint URL could not be constructed
    #[error("Invalid task endpoint: {0}")]
    Endpoint(String),
}

/// Errors raised on the export path.
///
/// These are surfaced to the user as a single message at the action
/// edge; nothing propagates to a global handler and no partial file is
/// left behind.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The captured region has no pixels to export
    #[error("Nothing to export: captured region has zero dimensions ({width}x{height})")]
    RenderNotReady { width: u32, height: u32 },

    /// Bitmap or document encoding failed
    #[error("Failed to encode {format} output: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
