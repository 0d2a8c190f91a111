//! Application errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("usage: textboard <session.json> [config.json]")]
    Usage,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Read a file and parse it as JSON.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> AppResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AppError::Json {
        path: path.to_path_buf(),
        source,
    })
}
