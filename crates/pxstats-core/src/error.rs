//! Error types for PXstats.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("Resolve error: {0}")]
    Resolve(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
