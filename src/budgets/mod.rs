pub mod models;
pub mod routes;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access::{Authorizer, PageRequest, Result},
    entities::{budgets, categories, wallets},
    store::{CreateBudgetParams, DynStore, UpdateBudgetParams},
};

use models::*;

pub type DynBudgetService = Arc<dyn BudgetService + Send + Sync>;

#[async_trait]
pub trait BudgetService {
    async fn create_budget(&self, principal: &str, req: CreateBudgetModel) -> Result<BudgetResponseModel>;
    async fn get_budget(&self, principal: &str, budget_id: i64) -> Result<BudgetResponseModel>;
    async fn list_budgets(&self, principal: &str, page: PageRequest) -> Result<Vec<BudgetResponseModel>>;
    async fn update_budget(
        &self,
        principal: &str,
        budget_id: i64,
        req: UpdateBudgetModel,
    ) -> Result<BudgetResponseModel>;
    async fn delete_budget(&self, principal: &str, budget_id: i64) -> Result<()>;
}

pub struct StoreBudgetService {
    authz: Authorizer,
    store: DynStore,
}

impl StoreBudgetService {
    pub fn new_dyn(authz: Authorizer, store: DynStore) -> DynBudgetService {
        Arc::new(Self { authz, store })
    }
}

#[async_trait]
impl BudgetService for StoreBudgetService {
    async fn create_budget(&self, principal: &str, req: CreateBudgetModel) -> Result<BudgetResponseModel> {
        let wallet = self.authz.fetch::<wallets::Model>(principal, req.wallet_id).await?;
        let cat = self.authz.fetch::<categories::Model>(principal, req.category_id).await?;

        let budget = self.store.create_budget(CreateBudgetParams {
            wallet_id: wallet.id,
            category_id: cat.id,
            amount: req.amount,
        }).await?;
        Ok(budget.into())
    }

    async fn get_budget(&self, principal: &str, budget_id: i64) -> Result<BudgetResponseModel> {
        let budget = self.authz.fetch::<budgets::Model>(principal, budget_id).await?;
        Ok(budget.into())
    }

    async fn list_budgets(&self, principal: &str, page: PageRequest) -> Result<Vec<BudgetResponseModel>> {
        let page = self.authz.paginate(principal, &page)?;
        let budgets = self.store.list_budgets(principal, page).await?;
        Ok(budgets.into_iter().map(Into::into).collect())
    }

    async fn update_budget(
        &self,
        principal: &str,
        budget_id: i64,
        req: UpdateBudgetModel,
    ) -> Result<BudgetResponseModel> {
        let budget = self.authz.fetch_owned::<budgets::Model>(principal, budget_id).await?;
        if let Some(category_id) = req.category_id {
            self.authz.fetch::<categories::Model>(principal, category_id).await?;
        }
        if req.category_id.is_none() && req.amount.is_none() {
            return Ok(budget.into());
        }

        let budget = self.store.update_budget(UpdateBudgetParams {
            id: budget.id,
            category_id: req.category_id,
            amount: req.amount,
        }).await?;
        Ok(budget.into())
    }

    async fn delete_budget(&self, principal: &str, budget_id: i64) -> Result<()> {
        self.authz.delete::<budgets::Model>(principal, budget_id).await
    }
}
