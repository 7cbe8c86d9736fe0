use thiserror::Error;

/// Why a trip draft was refused. Never fatal: the caller simply does not add it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("date is not in YYYY-MM-DD form: {0}")]
    MalformedDate(String),
    #[error("negative amount in field: {0}")]
    NegativeAmount(&'static str),
}

#[derive(Debug, Error)]
pub enum TripError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
