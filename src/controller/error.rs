use actix_web::http::StatusCode;
use actix_web::ResponseError;

use thiserror::Error;

use crate::error::Error;

pub type RestResult<T> = Result<T, RestError>;

/// Errors returned to API clients.
/// Bodies are plain text and never carry internal detail
#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    ParseError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalError(String),
}

impl From<Error> for RestError {
    fn from(e: Error) -> Self {
        match e {
            Error::ParsingError(msg) => Self::ParseError(msg),
            Error::NotFound(what) => Self::NotFound(format!("{} not found", what)),
            e => {
                tracing::error!(error.cause_chain = ?e, "Request failed: {}", e);
                Self::InternalError("Something went wrong".into())
            }
        }
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ParseError(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
