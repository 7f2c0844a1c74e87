//! Core error type

use thiserror::Error;

use crate::contact::ValidationError;

/// Folio error type
#[derive(Debug, Error)]
pub enum FolioError {
    /// Transport-level HTTP failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote service answered with a non-success status
    #[error("{endpoint} returned status {status}")]
    Status { status: u16, endpoint: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Malformed URL
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    /// Root margin string is not a valid CSS margin shorthand
    #[error("invalid root margin: {0}")]
    InvalidRootMargin(String),

    /// Visibility threshold outside 0..=1
    #[error("threshold must be within 0..=1, got {0}")]
    InvalidThreshold(f64),

    /// Tracker built without any section
    #[error("section order must contain at least one section")]
    EmptySectionOrder,

    /// Form failed constraint validation
    #[error("invalid form: {0}")]
    Validation(#[from] ValidationError),

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    /// Integration credentials are not configured
    #[error("missing configuration: {0}")]
    MissingCredentials(&'static str),

    /// Preferences database error
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, FolioError>;
