pub mod models;
pub mod routes;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access::{require_principal, Authorizer, PageRequest, Result},
    entities::wallets,
    store::{CreateWalletParams, DynStore, UpdateWalletParams},
    validations,
};

use models::*;

pub type DynWalletService = Arc<dyn WalletService + Send + Sync>;

#[async_trait]
pub trait WalletService {
    async fn create_wallet(&self, principal: &str, req: CreateWalletRequestModel) -> Result<WalletResponseModel>;
    async fn get_wallet(&self, principal: &str, wallet_id: i64) -> Result<WalletResponseModel>;
    async fn list_wallets(&self, principal: &str, page: PageRequest) -> Result<Vec<WalletResponseModel>>;
    async fn update_wallet(
        &self,
        principal: &str,
        wallet_id: i64,
        req: UpdateWalletRequestModel,
    ) -> Result<WalletResponseModel>;
    async fn delete_wallet(&self, principal: &str, wallet_id: i64) -> Result<()>;
}

pub struct StoreWalletService {
    authz: Authorizer,
    store: DynStore,
}

impl StoreWalletService {
    pub fn new_dyn(authz: Authorizer, store: DynStore) -> DynWalletService {
        Arc::new(Self { authz, store })
    }
}

#[async_trait]
impl WalletService for StoreWalletService {
    async fn create_wallet(&self, principal: &str, req: CreateWalletRequestModel) -> Result<WalletResponseModel> {
        require_principal(principal)?;
        validations::no_client_owner(&req.owner)?;
        let name = validations::name("name", &req.name)?;
        let currency = validations::currency(&req.currency)?;

        let wallet = self.store.create_wallet(CreateWalletParams {
            owner: principal.to_string(),
            name,
            currency,
        }).await?;
        Ok(wallet.into())
    }

    async fn get_wallet(&self, principal: &str, wallet_id: i64) -> Result<WalletResponseModel> {
        let wallet = self.authz.fetch::<wallets::Model>(principal, wallet_id).await?;
        Ok(wallet.into())
    }

    async fn list_wallets(&self, principal: &str, page: PageRequest) -> Result<Vec<WalletResponseModel>> {
        let page = self.authz.paginate(principal, &page)?;
        let wallets = self.store.list_wallets(principal, page).await?;
        Ok(wallets.into_iter().map(Into::into).collect())
    }

    async fn update_wallet(
        &self,
        principal: &str,
        wallet_id: i64,
        req: UpdateWalletRequestModel,
    ) -> Result<WalletResponseModel> {
        validations::no_client_owner(&req.owner)?;
        let name = req.name.as_deref().map(|name| validations::name("name", name)).transpose()?;
        let currency = req.currency.as_deref().map(validations::currency).transpose()?;

        let wallet = self.authz.fetch_owned::<wallets::Model>(principal, wallet_id).await?;
        if name.is_none() && currency.is_none() {
            return Ok(wallet.into());
        }

        let wallet = self.store.update_wallet(UpdateWalletParams {
            id: wallet.id,
            name,
            currency,
        }).await?;
        Ok(wallet.into())
    }

    async fn delete_wallet(&self, principal: &str, wallet_id: i64) -> Result<()> {
        self.authz.delete::<wallets::Model>(principal, wallet_id).await
    }
}
