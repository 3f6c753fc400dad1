use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Conflict: {0}")]
    Conflict(anyhow::Error),

    #[error("Persistence error: {0}")]
    PersistenceError(anyhow::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::PersistenceError(anyhow::Error::new(err))
    }
}

impl AppError {
    /// Message suitable for a non-fatal user notification.
    ///
    /// Validation and request problems surface verbatim so the user can fix
    /// their input; infrastructure problems are reduced to a stable phrase
    /// with the detail left to the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(errs) => format!("Validation failed: {}", errs),
            AppError::BadRequest(err) => err.to_string(),
            AppError::NotFound(err) => err.to_string(),
            AppError::Conflict(err) => err.to_string(),
            AppError::PersistenceError(_) => "Could not save your changes".to_string(),
            AppError::SerializationError(_) => "Could not save your changes".to_string(),
            AppError::InternalError(_) => "Something went wrong".to_string(),
            AppError::ConfigError(_) => "Something went wrong".to_string(),
        }
    }

    /// True when retrying the same operation may succeed (used by forms to
    /// keep the draft alive after a failed submit).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::PersistenceError(_) | AppError::InternalError(_)
        )
    }
}
