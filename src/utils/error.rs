use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Base64 decode failed: {0}")]
    Base64Error(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Stream publish failed: {message}")]
    PublishError { message: String },

    #[error("Document index failed: {message}")]
    IndexError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RelayError>;
