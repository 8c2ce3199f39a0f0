use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum PointIndexError {
    #[error("General error: {0}")]
    General(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Malformed point data: {0}")]
    MalformedData(String),
}

pub type Result<T> = std::result::Result<T, PointIndexError>;
