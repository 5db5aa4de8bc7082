//! Unified error types for the activity export service.

use thiserror::Error;

/// Top-level error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream activity API error.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Export rendering or artifact error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single call to the upstream activity API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream answered with a non-success status.
    #[error("upstream returned HTTP {status}")]
    BadStatus {
        /// The status code the upstream returned.
        status: reqwest::StatusCode,
    },

    /// The response body was not a JSON object.
    #[error("failed to decode upstream body: {0}")]
    Decode(String),
}

/// Errors while rendering the aggregated sequence or writing the artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON serialization failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// CSV has no derivable header because the sequence is empty.
    #[error("cannot derive csv headers from an empty sequence")]
    EmptySequence,

    /// Writing the temporary artifact failed.
    #[error("artifact io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
