//! The entity store: one query per method, nothing more.
//!
//! `Store` is the only way the rest of the crate touches the database.
//! It knows nothing about principals or ownership; callers that need
//! authorization go through [`crate::access::Authorizer`] first.

pub mod error;
pub mod params;


use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, Condition, DbConn, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    entities::{budgets, categories, expenses, prelude::*, users, wallets},
    utils::date_time_provider::DynDateTimeProvider,
};

pub use {error::*, params::*};

pub type DynStore = Arc<dyn Store + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Store {
    async fn create_user(&self, params: CreateUserParams) -> Result<users::Model>;
    async fn get_user(&self, id: i64) -> Result<users::Model>;
    async fn get_user_by_username(&self, username: &str) -> Result<users::Model>;
    async fn get_user_by_email(&self, email: &str) -> Result<users::Model>;
    async fn update_user(&self, params: UpdateUserParams) -> Result<users::Model>;
    async fn delete_user(&self, id: i64) -> Result<()>;

    async fn create_wallet(&self, params: CreateWalletParams) -> Result<wallets::Model>;
    async fn get_wallet(&self, id: i64) -> Result<wallets::Model>;
    async fn list_wallets(&self, owner: &str, page: Page) -> Result<Vec<wallets::Model>>;
    async fn update_wallet(&self, params: UpdateWalletParams) -> Result<wallets::Model>;
    async fn delete_wallet(&self, id: i64) -> Result<()>;

    async fn create_category(&self, params: CreateCategoryParams) -> Result<categories::Model>;
    async fn get_category(&self, id: i64) -> Result<categories::Model>;
    ///
    /// Lists the categories owned by `owner` together with the global ones.
    ///
    async fn list_categories(&self, owner: &str, page: Page) -> Result<Vec<categories::Model>>;
    async fn update_category(&self, params: UpdateCategoryParams) -> Result<categories::Model>;
    async fn delete_category(&self, id: i64) -> Result<()>;

    async fn create_expense(&self, params: CreateExpenseParams) -> Result<expenses::Model>;
    async fn get_expense(&self, id: i64) -> Result<expenses::Model>;
    async fn list_expenses(&self, wallet_id: i64, page: Page) -> Result<Vec<expenses::Model>>;
    async fn update_expense(&self, params: UpdateExpenseParams) -> Result<expenses::Model>;
    async fn delete_expense(&self, id: i64) -> Result<()>;

    async fn create_budget(&self, params: CreateBudgetParams) -> Result<budgets::Model>;
    async fn get_budget(&self, id: i64) -> Result<budgets::Model>;
    ///
    /// Lists the budgets of every wallet owned by `owner`.
    ///
    async fn list_budgets(&self, owner: &str, page: Page) -> Result<Vec<budgets::Model>>;
    async fn update_budget(&self, params: UpdateBudgetParams) -> Result<budgets::Model>;
    async fn delete_budget(&self, id: i64) -> Result<()>;
}

pub struct DbConnStore {
    db: DbConn,
    dt_provider: DynDateTimeProvider,
}

impl DbConnStore {
    pub fn new_dyn(db: DbConn, dt_provider: DynDateTimeProvider) -> DynStore {
        Arc::new(Self { db, dt_provider })
    }
}

fn set_or_skip<V: Into<sea_orm::Value>>(value: Option<V>) -> sea_orm::ActiveValue<V> {
    match value {
        Some(value) => Set(value),
        None => NotSet,
    }
}

fn ensure_deleted(rows_affected: u64) -> Result<()> {
    if rows_affected == 0 {
        return Err(Error::NotFound);
    }
    Ok(())
}

#[async_trait]
impl Store for DbConnStore {
    async fn create_user(&self, params: CreateUserParams) -> Result<users::Model> {
        let now = self.dt_provider.utc_now();
        let user = users::ActiveModel {
            username: Set(params.username),
            email: Set(params.email),
            hashed_password: Set(params.hashed_password),
            currency: Set(params.currency),
            password_changed_at: Set(now),
            created_at: Set(now),

            ..Default::default()
        };
        Ok(user.insert(&self.db).await?)
    }

    async fn get_user(&self, id: i64) -> Result<users::Model> {
        Users::find_by_id(id)
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<users::Model> {
        Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<users::Model> {
        Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn update_user(&self, params: UpdateUserParams) -> Result<users::Model> {
        // Rotating the password stamps the change time in the same statement
        let password_changed_at = if params.hashed_password.is_some() {
            Set(self.dt_provider.utc_now())
        } else {
            NotSet
        };
        let user = users::ActiveModel {
            id: Unchanged(params.id),
            email: set_or_skip(params.email),
            hashed_password: set_or_skip(params.hashed_password),
            currency: set_or_skip(params.currency),
            password_changed_at,

            ..Default::default()
        };
        Ok(user.update(&self.db).await?)
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        let res = Users::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted(res.rows_affected)
    }

    async fn create_wallet(&self, params: CreateWalletParams) -> Result<wallets::Model> {
        let wallet = wallets::ActiveModel {
            owner: Set(params.owner),
            name: Set(params.name),
            currency: Set(params.currency),
            created_at: Set(self.dt_provider.utc_now()),

            ..Default::default()
        };
        Ok(wallet.insert(&self.db).await?)
    }

    async fn get_wallet(&self, id: i64) -> Result<wallets::Model> {
        Wallets::find_by_id(id)
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn list_wallets(&self, owner: &str, page: Page) -> Result<Vec<wallets::Model>> {
        Ok(
            Wallets::find()
                .filter(wallets::Column::Owner.eq(owner))
                .order_by_asc(wallets::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db).await?
        )
    }

    async fn update_wallet(&self, params: UpdateWalletParams) -> Result<wallets::Model> {
        let wallet = wallets::ActiveModel {
            id: Unchanged(params.id),
            name: set_or_skip(params.name),
            currency: set_or_skip(params.currency),

            ..Default::default()
        };
        Ok(wallet.update(&self.db).await?)
    }

    async fn delete_wallet(&self, id: i64) -> Result<()> {
        let res = Wallets::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted(res.rows_affected)
    }

    async fn create_category(&self, params: CreateCategoryParams) -> Result<categories::Model> {
        let category = categories::ActiveModel {
            name: Set(params.name),
            owner: Set(params.owner),
            created_at: Set(self.dt_provider.utc_now()),

            ..Default::default()
        };
        Ok(category.insert(&self.db).await?)
    }

    async fn get_category(&self, id: i64) -> Result<categories::Model> {
        Categories::find_by_id(id)
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn list_categories(&self, owner: &str, page: Page) -> Result<Vec<categories::Model>> {
        Ok(
            Categories::find()
                .filter(
                    Condition::any()
                        .add(categories::Column::Owner.eq(owner))
                        .add(categories::Column::Owner.is_null())
                )
                .order_by_asc(categories::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db).await?
        )
    }

    async fn update_category(&self, params: UpdateCategoryParams) -> Result<categories::Model> {
        let category = categories::ActiveModel {
            id: Unchanged(params.id),
            name: Set(params.name),

            ..Default::default()
        };
        Ok(category.update(&self.db).await?)
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        let res = Categories::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted(res.rows_affected)
    }

    async fn create_expense(&self, params: CreateExpenseParams) -> Result<expenses::Model> {
        let expense = expenses::ActiveModel {
            wallet_id: Set(params.wallet_id),
            category_id: Set(params.category_id),
            amount: Set(params.amount),
            expense_description: Set(params.expense_description),
            expense_date: Set(params.expense_date),
            created_at: Set(self.dt_provider.utc_now()),

            ..Default::default()
        };
        Ok(expense.insert(&self.db).await?)
    }

    async fn get_expense(&self, id: i64) -> Result<expenses::Model> {
        Expenses::find_by_id(id)
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn list_expenses(&self, wallet_id: i64, page: Page) -> Result<Vec<expenses::Model>> {
        Ok(
            Expenses::find()
                .filter(expenses::Column::WalletId.eq(wallet_id))
                .order_by_desc(expenses::Column::ExpenseDate)
                .order_by_desc(expenses::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db).await?
        )
    }

    async fn update_expense(&self, params: UpdateExpenseParams) -> Result<expenses::Model> {
        let expense = expenses::ActiveModel {
            id: Unchanged(params.id),
            amount: set_or_skip(params.amount),
            category_id: set_or_skip(params.category_id),
            expense_description: set_or_skip(params.expense_description),
            expense_date: set_or_skip(params.expense_date),

            ..Default::default()
        };
        Ok(expense.update(&self.db).await?)
    }

    async fn delete_expense(&self, id: i64) -> Result<()> {
        let res = Expenses::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted(res.rows_affected)
    }

    async fn create_budget(&self, params: CreateBudgetParams) -> Result<budgets::Model> {
        let budget = budgets::ActiveModel {
            wallet_id: Set(params.wallet_id),
            category_id: Set(params.category_id),
            amount: Set(params.amount),
            created_at: Set(self.dt_provider.utc_now()),

            ..Default::default()
        };
        Ok(budget.insert(&self.db).await?)
    }

    async fn get_budget(&self, id: i64) -> Result<budgets::Model> {
        Budgets::find_by_id(id)
            .one(&self.db).await?
            .ok_or(Error::NotFound)
    }

    async fn list_budgets(&self, owner: &str, page: Page) -> Result<Vec<budgets::Model>> {
        Ok(
            Budgets::find()
                .inner_join(Wallets)
                .filter(wallets::Column::Owner.eq(owner))
                .order_by_asc(budgets::Column::Id)
                .limit(page.limit)
                .offset(page.offset)
                .all(&self.db).await?
        )
    }

    async fn update_budget(&self, params: UpdateBudgetParams) -> Result<budgets::Model> {
        let budget = budgets::ActiveModel {
            id: Unchanged(params.id),
            category_id: set_or_skip(params.category_id),
            amount: set_or_skip(params.amount),

            ..Default::default()
        };
        Ok(budget.update(&self.db).await?)
    }

    async fn delete_budget(&self, id: i64) -> Result<()> {
        let res = Budgets::delete_by_id(id).exec(&self.db).await?;
        ensure_deleted(res.rows_affected)
    }
}
