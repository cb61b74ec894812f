use axum::{http::StatusCode, response::IntoResponse};
use log::error;
use thiserror::Error;

use crate::{
    access,
    response::{error_response, internal_server_error_response},
    store,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unauthorized. Please use the `Authorization` header with JWT bearer token format")]
    MissingToken,
    #[error("Invalid access token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
    #[error("Access token has expired")]
    ExpiredToken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Token signing key must be at least {0} bytes")]
    KeyTooShort(usize),
    #[error("Could not sign access token: {0}")]
    TokenSigning(#[source] jsonwebtoken::errors::Error),
    #[error("An error occurred while using the password hasher: {0}")]
    PasswordHasher(argon2::password_hash::Error),
    #[error("A storage error occurred: {0}")]
    StorageError(#[from] store::Error),
    #[error(transparent)]
    Access(#[from] access::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::MissingToken | Error::InvalidToken(_) | 
            Error::ExpiredToken | Error::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, self.to_string())
            },
            Error::KeyTooShort(_) | Error::TokenSigning(_) |
            Error::PasswordHasher(_) | Error::StorageError(_) => {
                error!("{}", self);
                internal_server_error_response()
            },
            Error::Access(err) => err.into_response(),
        }
    }
}
