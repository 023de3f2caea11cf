//! Error taxonomy for one run.
//!
//! Each kind is caught at the boundary closest to its origin: a
//! [`SourceError`] ends the run, [`ServiceError`] and [`SinkError`] only
//! skip the task they belong to.

use thiserror::Error;

/// The task list could not be fetched or parsed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("task bridge unavailable: {0}")]
    Bridge(String),

    #[error("malformed task list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The text-generation request failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("response contained no completion")]
    EmptyChoices,

    #[error("completion was empty")]
    EmptyCompletion,

    /// Used by test doubles and wrappers that fail without an HTTP round-trip.
    #[error("{0}")]
    Other(String),
}

/// Writing a title back to the task manager failed.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("task bridge error: {0}")]
    Bridge(String),

    #[error("task not found: {0}")]
    NotFound(String),
}
