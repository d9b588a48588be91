use thiserror::Error;

/// Errors emitted while reading or validating the configuration file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
