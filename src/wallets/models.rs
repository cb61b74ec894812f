use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::wallets;

#[derive(Debug, Deserialize)]
pub struct CreateWalletRequestModel {
    pub name: String,
    pub currency: String,
    /// Rejected when present
    pub owner: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateWalletRequestModel {
    pub name: Option<String>,
    pub currency: Option<String>,
    /// Rejected when present
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalletResponseModel {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl From<wallets::Model> for WalletResponseModel {
    fn from(wallet: wallets::Model) -> Self {
        Self {
            id: wallet.id,
            owner: wallet.owner,
            name: wallet.name,
            currency: wallet.currency,
            created_at: wallet.created_at,
        }
    }
}
