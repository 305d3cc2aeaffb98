//! Configuration errors

use thiserror::Error;

/// Errors raised while configuring a grid.
///
/// Only construction and reconfiguration can fail. Runtime operations such
/// as sorting or paging treat bad input as a no-op instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Two column descriptors share a key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumn {
        /// The repeated key.
        key: String,
    },

    /// A page size of zero was requested.
    #[error("Invalid page size {size}: must be at least 1")]
    InvalidPageSize {
        /// The rejected size.
        size: usize,
    },
}

impl GridError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }
}
