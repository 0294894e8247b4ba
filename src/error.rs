use thiserror::Error;

/// Main error type for the report core
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unknown endpoint group: {0}")]
    UnknownGroup(String),

    #[error("invalid series theme: {0}")]
    InvalidTheme(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
