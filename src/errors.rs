use thiserror::Error;

/// Error type shared by the domain, storage, and configuration layers.
#[derive(Debug, Error)]
pub enum SpendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid month `{0}`: expected a value between 1 and 12")]
    InvalidPeriod(u32),
    #[error("Unknown account `{0}`")]
    UnknownAccount(String),
    #[error("Unknown payment group `{0}`")]
    UnknownPaymentGroup(String),
    #[error("Unknown screen `{0}`")]
    UnknownScreen(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Dataset error: {0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, SpendError>;
