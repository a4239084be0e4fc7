use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unknown color: {name}")]
    UnknownColor { name: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, SwapError>;
