//! Principal resolution: access tokens, password hashing, the
//! [`middleware::AuthUser`] extractor and the login endpoint.

pub mod error;
pub mod middleware;
pub mod models;
pub mod password_hasher;
pub mod routes;
pub mod token_service;


use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::store::{self, DynStore};

use {error::*, models::*, password_hasher::DynPasswordHasher, token_service::DynTokenService};

pub type DynAuthService = Arc<dyn AuthService + Send + Sync>;

#[async_trait]
pub trait AuthService {
    async fn login(&self, req: LoginRequestModel) -> Result<LoginResponseModel>;
}

pub struct CoreAuthService {
    store: DynStore,
    token_svc: DynTokenService,
    password_hasher: DynPasswordHasher,
}

impl CoreAuthService {
    pub fn new_dyn(
        store: DynStore,
        token_svc: DynTokenService,
        password_hasher: DynPasswordHasher,
    ) -> DynAuthService {
        Arc::new(Self { store, token_svc, password_hasher })
    }
}

#[async_trait]
impl AuthService for CoreAuthService {
    async fn login(&self, req: LoginRequestModel) -> Result<LoginResponseModel> {
        // Unknown user and wrong password are indistinguishable to the caller
        let user = match self.store.get_user_by_username(&req.username).await {
            Ok(user) => user,
            Err(store::Error::NotFound) => {
                debug!("Login attempt for unknown user {}", req.username);
                return Err(Error::InvalidCredentials);
            },
            Err(err) => return Err(err.into()),
        };

        if !self.password_hasher.verify_password(&req.password, &user.hashed_password)? {
            debug!("Login attempt with wrong password for {}", req.username);
            return Err(Error::InvalidCredentials);
        }

        let token = self.token_svc.create_access_token(&user.username)?;
        Ok(LoginResponseModel {
            access_token: token.token,
            access_token_expires_at: token.expires_at,
            user: user.into(),
        })
    }
}
