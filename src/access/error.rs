use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use log::{debug, error};
use thiserror::Error;

use crate::{response::{error_response, internal_server_error_response}, store};

pub type Result<T> = std::result::Result<T, Error>;

///
/// Why an authorized operation did not succeed. Every variant maps to
/// exactly one HTTP status.
///
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("A storage error occurred: {0}")]
    StorageError(#[from] store::Error),
}

impl Error {
    pub fn unauthorized(kind: &str, id: i64) -> Self {
        Self::Unauthorized(format!("Not authorized to access {} {}", kind, id))
    }

    ///
    /// Translates a failed lookup. A missing row becomes `NotFound`,
    /// anything else stays a storage failure.
    ///
    pub fn from_lookup(kind: &str, id: i64, err: store::Error) -> Self {
        match err {
            store::Error::NotFound => Self::NotFound(format!("{} with ID {} not found", kind, id)),
            err => Self::StorageError(err),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(value: JsonRejection) -> Self {
        Self::InvalidArgument(value.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(value: PathRejection) -> Self {
        Self::InvalidArgument(value.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(value: QueryRejection) -> Self {
        Self::InvalidArgument(value.body_text())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::InvalidArgument(_) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            },
            Error::Unauthorized(_) => {
                debug!("{}", self);
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            },
            Error::NotFound(_) => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            },
            Error::StorageError(_) => {
                error!("{:?}", self);
                internal_server_error_response()
            },
        }
    }
}
