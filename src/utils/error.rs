use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Metadata request failed: {0}")]
    MetadataRequestError(#[from] reqwest::Error),

    #[error("No metadata available for ISBN {isbn}: {reason}")]
    MetadataUnavailableError { isbn: String, reason: String },

    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Policy file error: {0}")]
    PolicyParseError(#[from] toml::de::Error),

    #[error("Configuration error for {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

impl SyncError {
    /// Whether the surrounding delivery mechanism should redeliver the message.
    /// Collaborator failures are retryable; configuration problems are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::MetadataRequestError(_)
            | SyncError::MetadataUnavailableError { .. }
            | SyncError::PersistenceError { .. }
            | SyncError::IoError(_) => true,
            SyncError::SerializationError(_)
            | SyncError::PolicyParseError(_)
            | SyncError::InvalidConfigValueError { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
