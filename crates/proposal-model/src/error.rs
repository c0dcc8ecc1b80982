use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid date key {0}: expected YYYYMMDD")]
    InvalidDateKey(i64),
    #[error("unknown date window: {0}")]
    UnknownWindow(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
