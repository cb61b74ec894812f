use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::date_time_provider::DynDateTimeProvider;

use super::error::*;

pub const MIN_SECRET_LEN: usize = 32;

pub type DynTokenService = Arc<dyn TokenService + Send + Sync>;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenServiceConfig {
    pub audience: String,
    pub access_token_lifetime_s: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the principal
    pub sub: String,
    pub aud: String,
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg_attr(test, automock)]
pub trait TokenService {
    fn create_access_token(&self, username: &str) -> Result<AccessToken>;
    fn verify_access_token(&self, token: &str) -> Result<Claims>;
}

///
/// HS256 access tokens. Expiry is checked against the injected clock
/// rather than the system one.
///
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    dt_provider: DynDateTimeProvider,
    config: TokenServiceConfig,
}

impl JwtTokenService {
    pub fn new_dyn(
        secret: &[u8],
        dt_provider: DynDateTimeProvider,
        config: TokenServiceConfig,
    ) -> Result<DynTokenService> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(Error::KeyTooShort(MIN_SECRET_LEN));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_required_spec_claims(&["sub", "aud", "exp"]);

        Ok(Arc::new(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            dt_provider,
            config,
        }))
    }
}

impl TokenService for JwtTokenService {
    fn create_access_token(&self, username: &str) -> Result<AccessToken> {
        let now = self.dt_provider.utc_now();
        let expires_at = now + Duration::seconds(self.config.access_token_lifetime_s);
        let claims = Claims {
            sub: username.to_string(),
            aud: self.config.audience.clone(),
            jti: Uuid::now_v7(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(Error::TokenSigning)?;

        Ok(AccessToken { token, expires_at })
    }

    fn verify_access_token(&self, token: &str) -> Result<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(Error::InvalidToken)?
            .claims;

        if claims.exp <= self.dt_provider.utc_now().timestamp() {
            return Err(Error::ExpiredToken);
        }
        Ok(claims)
    }
}
