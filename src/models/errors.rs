use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Missing required config value: {field}")]
    MissingValue { field: String },
    #[error("Invalid simulation URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Simulation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Simulation service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Malformed simulation document: missing {path}")]
    MissingLogs { path: String },
    #[error("Malformed simulation document: invalid log entries: {0}")]
    InvalidLogs(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("{event} event is missing input {index} ({field})")]
    MissingInput {
        event: String,
        index: usize,
        field: String,
    },
    #[error("{event} event is missing the emitting contract address")]
    MissingEmitter { event: String },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
