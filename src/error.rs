//! Crate-level error types.
//!
//! [`SterlingError`] unifies every failure source (configuration, HTTP,
//! JSON, provider payloads, calendar lookups) behind a single enum so
//! callers can match on the variant they care about while still using the
//! `?` operator for easy propagation. Network failures, provider-reported
//! errors, and empty-session conditions are distinct variants rather than
//! one generic "try again" message.

use chrono::NaiveDate;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SterlingError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum SterlingError {
    /// An environment variable was missing, empty when required, or failed
    /// to parse.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP request failed (connect, send, or non-2xx status).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The provider returned a well-formed payload that reports an error
    /// or is missing a field we require.
    #[error("provider error: {0}")]
    Provider(String),

    /// The exchange returned an empty daily table for a date the calendar
    /// considered a trading session.
    #[error("no trading data for {0}")]
    EmptySession(NaiveDate),

    /// No trading session could be found within the calendar scan bound.
    #[error("no trading session on or before {0}")]
    NoSession(NaiveDate),

    /// Terminal setup, drawing, or teardown failure.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
