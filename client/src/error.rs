use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Invalid search URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid value for header '{name}'")]
    InvalidHeader { name: String },

    #[error("Request to JumpCloud failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JumpCloud answered with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response body is not a search result: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("No system found with hostname '{hostname}'")]
    NotFound { hostname: String },

    #[error("Got {count} systems for hostname '{hostname}', expected exactly one")]
    Ambiguous { hostname: String, count: u64 },

    #[error("Could not load config file {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
