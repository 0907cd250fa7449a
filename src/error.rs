//! Error taxonomy of the todo service.

use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TodoError {
    /// The request body could not be parsed into the expected shape.
    #[error("{0}")]
    Validation(String),

    #[error("Todo not found")]
    NotFound,

    /// Any failure reported by the store; the message is passed through verbatim.
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
