use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::users;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequestModel {
    pub username: String,
    pub email: String,
    pub password: String,
    pub currency: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequestModel {
    /// Usernames are immutable; present only so it can be rejected
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub currency: Option<String>,
}

///
/// Public view of a user. The password hash never leaves the service.
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserResponseModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub currency: String,
    pub password_changed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserResponseModel {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            currency: user.currency,
            password_changed_at: user.password_changed_at,
            created_at: user.created_at,
        }
    }
}
