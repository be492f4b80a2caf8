use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Book with ID {0} not found")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ShelfError::InvalidData(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
