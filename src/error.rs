use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("refusing to overwrite existing chunk files in: {} (pass --force to replace them)", .0.display())]
    DestinationCollision(PathBuf),

    #[error("output path exists and is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("parse failed: {0}")]
    ParseFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
