use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::users::models::UserResponseModel;

#[derive(Debug, Deserialize)]
pub struct LoginRequestModel {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseModel {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub user: UserResponseModel,
}
