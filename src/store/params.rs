use chrono::{DateTime, Utc};

///
/// Window into an ordered result set, already translated from a
/// 1-based page number into a row offset.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub id: i64,
    pub email: Option<String>,
    pub hashed_password: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWalletParams {
    pub owner: String,
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateWalletParams {
    pub id: i64,
    pub name: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryParams {
    pub name: String,
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryParams {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExpenseParams {
    pub wallet_id: i64,
    pub category_id: Option<i64>,
    pub amount: i64,
    pub expense_description: Option<String>,
    pub expense_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateExpenseParams {
    pub id: i64,
    pub amount: Option<i64>,
    /// `Some(None)` clears the column
    pub category_id: Option<Option<i64>>,
    /// `Some(None)` clears the column
    pub expense_description: Option<Option<String>>,
    pub expense_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBudgetParams {
    pub wallet_id: i64,
    pub category_id: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBudgetParams {
    pub id: i64,
    pub category_id: Option<i64>,
    pub amount: Option<i64>,
}
