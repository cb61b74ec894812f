//! Request-field checks. All failures are `InvalidArgument` and happen
//! before any store access.

use lazy_static::lazy_static;
use regex::Regex;

use crate::access::{Error, Result};


pub const CURRENCIES: [&str; 4] = ["RUB", "USD", "EUR", "CAD"];

const MAX_NAME_LEN: usize = 64;
const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub fn currency(value: &str) -> Result<String> {
    if CURRENCIES.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(Error::InvalidArgument(format!(
            "Unsupported currency '{}'. Expected one of {}",
            value,
            CURRENCIES.join(", ")
        )))
    }
}

///
/// Trims `value` and checks it is a usable display name.
///
pub fn name(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(format!("{} must not be empty", field)));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(Error::InvalidArgument(format!(
            "{} must be at most {} characters",
            field, MAX_NAME_LEN
        )));
    }
    Ok(trimmed.to_string())
}

pub fn username(value: &str) -> Result<String> {
    if USERNAME_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(Error::InvalidArgument(String::from(
            "username must be non-empty and contain only letters, digits or '_'"
        )))
    }
}

pub fn email(value: &str) -> Result<String> {
    let fmt_email = value.trim().to_lowercase();
    if EMAIL_RE.is_match(&fmt_email) {
        Ok(fmt_email)
    } else {
        Err(Error::InvalidArgument(format!("'{}' is not a valid email", value)))
    }
}

pub fn password(value: &str) -> Result<()> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::InvalidArgument(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

///
/// Owners are derived from the authenticated principal; a client that
/// tries to name one is rejected outright.
///
pub fn no_client_owner(owner: &Option<String>) -> Result<()> {
    if owner.is_some() {
        return Err(Error::InvalidArgument(String::from(
            "owner is derived from the authenticated user and must not be supplied"
        )));
    }
    Ok(())
}
