//! Expenses belong to a wallet and are authorized through it.

pub mod models;
pub mod routes;


use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access::{Authorizer, Error, Result},
    entities::{categories, expenses, wallets},
    store::{CreateExpenseParams, DynStore, UpdateExpenseParams},
    utils::date_time_provider::DynDateTimeProvider,
};

use models::*;

pub type DynExpenseService = Arc<dyn ExpenseService + Send + Sync>;

#[async_trait]
pub trait ExpenseService {
    async fn create_expense(&self, principal: &str, req: CreateExpenseModel) -> Result<ExpenseResponseModel>;
    async fn get_expense(&self, principal: &str, expense_id: i64) -> Result<ExpenseResponseModel>;
    async fn list_expenses(&self, principal: &str, query: ListExpensesQuery) -> Result<Vec<ExpenseResponseModel>>;
    async fn update_expense(
        &self,
        principal: &str,
        expense_id: i64,
        req: UpdateExpenseModel,
    ) -> Result<ExpenseResponseModel>;
    async fn delete_expense(&self, principal: &str, expense_id: i64) -> Result<()>;
}

pub struct StoreExpenseService {
    authz: Authorizer,
    store: DynStore,
    dt_provider: DynDateTimeProvider,
}

impl StoreExpenseService {
    pub fn new_dyn(
        authz: Authorizer,
        store: DynStore,
        dt_provider: DynDateTimeProvider,
    ) -> DynExpenseService {
        Arc::new(Self { authz, store, dt_provider })
    }

    /// A referenced category must be one the principal can see
    async fn check_category(&self, principal: &str, category_id: Option<i64>) -> Result<()> {
        if let Some(category_id) = category_id {
            self.authz.fetch::<categories::Model>(principal, category_id).await?;
        }
        Ok(())
    }
}

fn fmt_description(description: Option<String>) -> Option<String> {
    description
        .map(|desc| desc.trim().to_string())
        .filter(|desc| !desc.is_empty())
}

#[async_trait]
impl ExpenseService for StoreExpenseService {
    async fn create_expense(&self, principal: &str, req: CreateExpenseModel) -> Result<ExpenseResponseModel> {
        let wallet = self.authz.fetch::<wallets::Model>(principal, req.wallet_id).await?;
        self.check_category(principal, req.category_id).await?;

        let expense = self.store.create_expense(CreateExpenseParams {
            wallet_id: wallet.id,
            category_id: req.category_id,
            amount: req.amount,
            expense_description: fmt_description(req.expense_description),
            expense_date: req.expense_date.unwrap_or_else(|| self.dt_provider.utc_now()),
        }).await?;
        Ok(expense.into())
    }

    async fn get_expense(&self, principal: &str, expense_id: i64) -> Result<ExpenseResponseModel> {
        let expense = self.authz.fetch::<expenses::Model>(principal, expense_id).await?;
        Ok(expense.into())
    }

    async fn list_expenses(&self, principal: &str, query: ListExpensesQuery) -> Result<Vec<ExpenseResponseModel>> {
        let wallet_id = query.wallet_id
            .ok_or_else(|| Error::InvalidArgument(String::from("wallet_id is required")))?;
        let page = self.authz.paginate(principal, &query.page())?;

        let wallet = self.authz.fetch::<wallets::Model>(principal, wallet_id).await?;
        let expenses = self.store.list_expenses(wallet.id, page).await?;
        Ok(expenses.into_iter().map(Into::into).collect())
    }

    async fn update_expense(
        &self,
        principal: &str,
        expense_id: i64,
        req: UpdateExpenseModel,
    ) -> Result<ExpenseResponseModel> {
        let expense = self.authz.fetch_owned::<expenses::Model>(principal, expense_id).await?;
        if let Some(category_id) = req.category_id {
            self.check_category(principal, category_id).await?;
        }

        let params = UpdateExpenseParams {
            id: expense.id,
            amount: req.amount,
            category_id: req.category_id,
            expense_description: req.expense_description.map(fmt_description),
            expense_date: req.expense_date,
        };
        if params.amount.is_none() && params.category_id.is_none() &&
            params.expense_description.is_none() && params.expense_date.is_none() {
            return Ok(expense.into());
        }

        let expense = self.store.update_expense(params).await?;
        Ok(expense.into())
    }

    async fn delete_expense(&self, principal: &str, expense_id: i64) -> Result<()> {
        self.authz.delete::<expenses::Model>(principal, expense_id).await
    }
}
