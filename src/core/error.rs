use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Invalid pet name: {0}")]
    InvalidName(String),

    #[error("Unknown food id: {0}")]
    UnknownFood(String),

    #[error("Unknown store item id: {0}")]
    UnknownItem(String),

    #[error("Snapshot rejected: {0}")]
    InvalidSnapshot(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
