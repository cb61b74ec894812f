use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use lazy_static::lazy_static;
use regex::Regex;

use super::{error::*, token_service::DynTokenService};

lazy_static! {
    static ref AUTH_RE: Regex =
        Regex::new(r"^(?i)bearer\s+([\w-]+\.[\w-]+\.[\w-]+)$").unwrap();
}

///
/// The authenticated principal. Extracting it rejects the request with
/// 401 before the handler runs.
///
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    DynTokenService: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let token = extract_token(parts)?;
        let token_svc = DynTokenService::from_ref(state);

        let claims = token_svc.verify_access_token(&token)?;
        if claims.sub.is_empty() {
            return Err(Error::MissingToken);
        }
        Ok(AuthUser { username: claims.sub })
    }
}

fn extract_token(parts: &Parts) -> Result<String> {
    let contents = parts.headers.get(header::AUTHORIZATION)
        .ok_or(Error::MissingToken)?
        .to_str()
        .map_err(|_| Error::MissingToken)?;

    AUTH_RE.captures(contents)
        .map(|caps| caps[1].to_string())
        .ok_or(Error::MissingToken)
}
