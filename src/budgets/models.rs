use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::budgets;

#[derive(Debug, Deserialize)]
pub struct CreateBudgetModel {
    pub wallet_id: i64,
    pub category_id: i64,
    pub amount: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBudgetModel {
    pub category_id: Option<i64>,
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BudgetResponseModel {
    pub id: i64,
    pub wallet_id: i64,
    pub category_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<budgets::Model> for BudgetResponseModel {
    fn from(budget: budgets::Model) -> Self {
        Self {
            id: budget.id,
            wallet_id: budget.wallet_id,
            category_id: budget.category_id,
            amount: budget.amount,
            created_at: budget.created_at,
        }
    }
}
