use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Can't serialize json: {0}")]
    SerializeJson(serde_json::Error),
    #[error("Can't deserialize json: {0}")]
    DeserializeJson(serde_json::Error),
    #[error("Can't parse url: {0}")]
    ParseUrl(#[from] url::ParseError),
    #[error("Invalid folder name: {0}")]
    InvalidFolder(String),
    #[error("Can't read keepers from {path}: expected an import report or a list of bookmarks")]
    InvalidKeepers { path: String },
    #[error("Can't write to stdout: {0}")]
    WriteStdout(io::Error),
    #[error("Missing config directory")]
    MissingConfigDir,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
