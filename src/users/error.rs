use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{access, auth, response::error_response, store};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),
    #[error("Email {0} already in use")]
    EmailInUse(String),
    #[error(transparent)]
    Access(#[from] access::Error),
    #[error(transparent)]
    Auth(#[from] auth::error::Error),
}

impl From<store::Error> for Error {
    fn from(value: store::Error) -> Self {
        Self::Access(access::Error::StorageError(value))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::UsernameTaken(_) | Error::EmailInUse(_) => {
                error_response(StatusCode::CONFLICT, self.to_string())
            },
            Error::Access(err) => err.into_response(),
            Error::Auth(err) => err.into_response(),
        }
    }
}
