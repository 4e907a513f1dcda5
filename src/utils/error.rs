use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("product name is empty")]
    EmptyName,

    #[error("stored product list is malformed: {0}")]
    MalformedStoredState(#[source] serde_json::Error),

    #[error("failed to write product store: {0}")]
    StoreWriteFailure(#[source] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ListError>;
