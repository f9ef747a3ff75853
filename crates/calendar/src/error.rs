//! Errors for the file-facing parts of the crate (policy and snapshot loading).
//!
//! Generation itself never fails: malformed records are skipped and logged.

#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse/deserialization error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but its content is not acceptable.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result alias for calendar loading operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
