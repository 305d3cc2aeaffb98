//! FieldError for column accessors

/// Error type for reading a cell value out of a row.
///
/// Accessors return this instead of a [`Value`](crate::Value) when a field
/// cannot be read. The engine never propagates it: a failed read counts as
/// "no match" for search and sorts after every readable value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The requested field does not exist in the row.
    #[error("Field '{field}' not found in row")]
    Missing { field: String },

    /// The accessor failed for another reason.
    #[error("Field '{field}' could not be read: {message}")]
    Accessor { field: String, message: String },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new accessor error.
    pub fn accessor(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Accessor {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Accessor { field, .. } => field,
        }
    }
}
