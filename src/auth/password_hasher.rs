use std::sync::Arc;

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher as _, PasswordVerifier,
};
#[cfg(test)]
use mockall::automock;

use super::error::*;

pub type DynPasswordHasher = Arc<dyn PasswordHasher + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait PasswordHasher {
    /// Returns the PHC string for `password` with a fresh salt
    fn hash_password(&self, password: &str) -> Result<String>;
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}

pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new_dyn() -> DynPasswordHasher {
        Arc::new(Argon2PasswordHasher)
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(Error::PasswordHasher)?;
        Ok(hash.to_string())
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash).map_err(Error::PasswordHasher)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(Error::PasswordHasher(err)),
        }
    }
}
