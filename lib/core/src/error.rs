use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid profile: missing dimension '{0}'")]
    InvalidProfile(String),

    #[error("Item '{0}' has no attributes")]
    MissingAttributes(String),

    #[error("Item '{item}' is missing attribute '{key}'")]
    IncompleteAttributes { item: String, key: String },

    #[error("Malformed date: {0}")]
    MalformedDate(String),

    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
