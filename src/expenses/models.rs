use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{access::PageRequest, entities::expenses};

#[derive(Debug, Deserialize)]
pub struct CreateExpenseModel {
    pub wallet_id: i64,
    pub category_id: Option<i64>,
    /// Minor currency units
    pub amount: i64,
    pub expense_description: Option<String>,
    /// Defaults to the time of the request
    pub expense_date: Option<DateTime<Utc>>,
}

///
/// Absent fields are left alone. For the nullable columns an explicit
/// `null` clears the value.
///
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExpenseModel {
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expense_description: Option<Option<String>>,
    pub expense_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub struct ListExpensesQuery {
    pub wallet_id: Option<i64>,
    pub page_id: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListExpensesQuery {
    pub fn page(&self) -> PageRequest {
        PageRequest { page_id: self.page_id, page_size: self.page_size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExpenseResponseModel {
    pub id: i64,
    pub wallet_id: i64,
    pub category_id: Option<i64>,
    pub amount: i64,
    pub expense_description: Option<String>,
    pub expense_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<expenses::Model> for ExpenseResponseModel {
    fn from(expense: expenses::Model) -> Self {
        Self {
            id: expense.id,
            wallet_id: expense.wallet_id,
            category_id: expense.category_id,
            amount: expense.amount,
            expense_description: expense.expense_description,
            expense_date: expense.expense_date,
            created_at: expense.created_at,
        }
    }
}

// Distinguishes an explicit `null` (Some(None)) from a missing field (None)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
