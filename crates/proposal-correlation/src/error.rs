use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrelationError {
    #[error("required column missing from subset: {0}")]
    MissingColumn(String),
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CorrelationError>;
