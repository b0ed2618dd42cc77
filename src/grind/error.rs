use crate::progress::ProgressKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrindError {
    #[error("Question not found: {0}")]
    QuestionNotFound(ProgressKey),

    #[error("Topic not found: {0}")]
    TopicNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sheet error: {0}")]
    Sheet(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GrindError>;
