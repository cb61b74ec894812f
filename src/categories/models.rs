use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::categories;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryModel {
    pub name: String,
    /// Rejected when present
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryModel {
    pub name: String,
    /// Rejected when present
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GetCategoryModel {
    pub id: i64,
    pub name: String,
    /// `None` for global categories shared by every user
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<categories::Model> for GetCategoryModel {
    fn from(cat: categories::Model) -> Self {
        Self {
            id: cat.id,
            name: cat.name,
            owner: cat.owner,
            created_at: cat.created_at,
        }
    }
}
