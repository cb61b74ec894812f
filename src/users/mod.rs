pub mod error;
pub mod models;
pub mod routes;


use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::SqlErr;

use crate::{
    access::{self, Authorizer},
    auth::password_hasher::DynPasswordHasher,
    entities::users,
    store::{self, CreateUserParams, DynStore, UpdateUserParams},
    validations,
};

use {error::*, models::*};

pub type DynUserService = Arc<dyn UserService + Send + Sync>;

#[async_trait]
pub trait UserService {
    async fn create_user(&self, req: CreateUserRequestModel) -> Result<UserResponseModel>;
    async fn get_user(&self, principal: &str, user_id: i64) -> Result<UserResponseModel>;
    async fn update_user(
        &self,
        principal: &str,
        user_id: i64,
        req: UpdateUserRequestModel,
    ) -> Result<UserResponseModel>;
    async fn delete_user(&self, principal: &str, user_id: i64) -> Result<()>;
}

pub struct StoreUserService {
    authz: Authorizer,
    store: DynStore,
    password_hasher: DynPasswordHasher,
}

impl StoreUserService {
    pub fn new_dyn(
        authz: Authorizer,
        store: DynStore,
        password_hasher: DynPasswordHasher,
    ) -> DynUserService {
        Arc::new(Self { authz, store, password_hasher })
    }

    async fn ensure_username_free(&self, username: &str) -> Result<()> {
        match self.store.get_user_by_username(username).await {
            Ok(_) => Err(Error::UsernameTaken(username.to_string())),
            Err(store::Error::NotFound) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn ensure_email_free(&self, email: &str) -> Result<()> {
        match self.store.get_user_by_email(email).await {
            Ok(_) => Err(Error::EmailInUse(email.to_string())),
            Err(store::Error::NotFound) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

///
/// Maps a unique-index failure onto the conflict it represents. Anything
/// else stays a storage error.
///
pub(crate) fn conflict_or_storage(err: store::Error, username: &str, email: &str) -> Error {
    if let store::Error::DbErr(db_err) = &err {
        if let Some(SqlErr::UniqueConstraintViolation(msg)) = db_err.sql_err() {
            return if msg.contains("users.email") {
                Error::EmailInUse(email.to_string())
            } else {
                Error::UsernameTaken(username.to_string())
            };
        }
    }
    err.into()
}

#[async_trait]
impl UserService for StoreUserService {
    async fn create_user(&self, req: CreateUserRequestModel) -> Result<UserResponseModel> {
        let username = validations::username(&req.username)?;
        let email = validations::email(&req.email)?;
        validations::password(&req.password)?;
        let currency = validations::currency(&req.currency)?;

        self.ensure_username_free(&username).await?;
        self.ensure_email_free(&email).await?;

        let hashed_password = self.password_hasher.hash_password(&req.password)?;
        let res = self.store.create_user(CreateUserParams {
            username: username.clone(),
            email: email.clone(),
            hashed_password,
            currency,
        }).await;

        // A concurrent registration may still win the unique index
        res.map(Into::into)
            .map_err(|err| conflict_or_storage(err, &username, &email))
    }

    async fn get_user(&self, principal: &str, user_id: i64) -> Result<UserResponseModel> {
        let user = self.authz.fetch::<users::Model>(principal, user_id).await?;
        Ok(user.into())
    }

    async fn update_user(
        &self,
        principal: &str,
        user_id: i64,
        req: UpdateUserRequestModel,
    ) -> Result<UserResponseModel> {
        if req.username.is_some() {
            return Err(access::Error::InvalidArgument(
                String::from("username cannot be changed")
            ).into());
        }
        let email = req.email.as_deref().map(validations::email).transpose()?;
        if let Some(password) = &req.password {
            validations::password(password)?;
        }
        let currency = req.currency.as_deref().map(validations::currency).transpose()?;

        let user = self.authz.fetch_owned::<users::Model>(principal, user_id).await?;

        let email = email.filter(|email| *email != user.email);
        if let Some(email) = &email {
            self.ensure_email_free(email).await?;
        }
        let hashed_password = req.password.as_deref()
            .map(|password| self.password_hasher.hash_password(password))
            .transpose()?;

        if email.is_none() && hashed_password.is_none() && currency.is_none() {
            return Ok(user.into());
        }

        let conflict_email = email.clone().unwrap_or_default();
        let updated = self.store.update_user(UpdateUserParams {
            id: user.id,
            email,
            hashed_password,
            currency,
        }).await
            .map_err(|err| conflict_or_storage(err, &user.username, &conflict_email))?;
        Ok(updated.into())
    }

    async fn delete_user(&self, principal: &str, user_id: i64) -> Result<()> {
        self.authz.delete::<users::Model>(principal, user_id).await?;
        Ok(())
    }
}
