//! Registry error types.

/// Errors that can occur while checking or rendering a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The same partitioner name appears more than once.
    #[error("duplicate partitioner name '{name}' (in '{first}' and '{second}')")]
    DuplicateName {
        name: String,
        first: String,
        second: String,
    },

    /// A required field of an entry is empty.
    #[error("entry #{index} in '{category}' has an empty {field}")]
    EmptyField {
        category: String,
        index: usize,
        field: &'static str,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
