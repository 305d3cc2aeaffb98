//! CLI errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors the CLI reports before exiting.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be opened or read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was not valid JSON of the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The grid rejected its configuration.
    #[error(transparent)]
    Grid(#[from] datagrid::GridError),

    /// The rows file was JSON but not an array of objects.
    #[error("Invalid rows: {0}")]
    InvalidRows(String),
}

impl CliError {
    /// Creates a new IO error for a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JSON error for a path.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
