use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Invalid column ID: {0:?}")]
    InvalidColumnId(String),

    #[error("Invalid task ID: {0:?}")]
    InvalidTaskId(String),

    #[error("Malformed drag event: {0}")]
    MalformedEvent(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
