//! Authorization-scoped access to owned rows.
//!
//! Every entity endpoint goes through [`Authorizer`]: validate the ID,
//! confirm the row exists, resolve its owner (through the wallet for
//! expenses and budgets) and only then compare that owner with the
//! requesting principal. Nothing is cached; each call reads fresh rows.

pub mod error;
pub mod pagination;
mod resources;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use log::debug;

use crate::store::{self, DynStore, Page};

pub use {error::*, pagination::*};

///
/// Where ownership of a row is recorded.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner<'a> {
    /// The row names its owning username directly
    Principal(&'a str),
    /// The row belongs to whoever owns this wallet
    Wallet(i64),
    /// Global row, readable by everyone and writable by no one
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    Read,
    Write,
}

#[async_trait]
pub trait Resource: Sized + Send + Sync {
    /// Name used in error messages
    const KIND: &'static str;

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self>;
    async fn remove(store: &DynStore, id: i64) -> store::Result<()>;
    fn owner(&self) -> Owner<'_>;
}

#[derive(Clone)]
pub struct Authorizer {
    store: DynStore,
    pagination: PaginationConfig,
}

impl Authorizer {
    pub fn new(store: DynStore, pagination: PaginationConfig) -> Self {
        Self { store, pagination }
    }

    ///
    /// Fetches the row with the given `id` if `principal` may read it.
    ///
    /// Validation happens before any store access, and the existence check
    /// strictly precedes the ownership check, so a missing row is always
    /// `NotFound` regardless of who asks.
    ///
    pub async fn fetch<R: Resource>(&self, principal: &str, id: i64) -> Result<R> {
        self.fetch_with(principal, id, Intent::Read).await
    }

    ///
    /// Like [`Authorizer::fetch`], but for rows about to be mutated.
    /// Shared rows are rejected.
    ///
    pub async fn fetch_owned<R: Resource>(&self, principal: &str, id: i64) -> Result<R> {
        self.fetch_with(principal, id, Intent::Write).await
    }

    pub async fn delete<R: Resource>(&self, principal: &str, id: i64) -> Result<()> {
        self.fetch_owned::<R>(principal, id).await?;
        R::remove(&self.store, id).await?;
        Ok(())
    }

    ///
    /// Validates a list request. Lists are always filtered by owner in the
    /// store query itself, so this is the only check they need.
    ///
    pub fn paginate(&self, principal: &str, req: &PageRequest) -> Result<Page> {
        require_principal(principal)?;
        self.pagination.page(req)
    }

    async fn fetch_with<R: Resource>(&self, principal: &str, id: i64, intent: Intent) -> Result<R> {
        require_principal(principal)?;
        if id <= 0 {
            return Err(Error::InvalidArgument(format!("Invalid {} ID: {}", R::KIND, id)));
        }

        let resource = R::fetch(&self.store, id).await
            .map_err(|err| Error::from_lookup(R::KIND, id, err))?;

        let owner = self.resolve_owner(resource.owner()).await?;
        match (owner, intent) {
            (Some(owner), _) if owner == principal => Ok(resource),
            (None, Intent::Read) => Ok(resource),
            _ => {
                debug!("Denied {:?} of {} {} to {}", intent, R::KIND, id, principal);
                Err(Error::unauthorized(R::KIND, id))
            }
        }
    }

    async fn resolve_owner(&self, owner: Owner<'_>) -> Result<Option<String>> {
        match owner {
            Owner::Principal(username) => Ok(Some(username.to_string())),
            Owner::Wallet(wallet_id) => {
                let wallet = self.store.get_wallet(wallet_id).await
                    .map_err(|err| Error::from_lookup("wallet", wallet_id, err))?;
                Ok(Some(wallet.owner))
            },
            Owner::Shared => Ok(None),
        }
    }
}

///
/// Rejects an empty principal before any I/O. Creates call this directly
/// since they have no row to authorize against.
///
pub fn require_principal(principal: &str) -> Result<()> {
    if principal.is_empty() {
        return Err(Error::Unauthorized(String::from("Missing authenticated principal")));
    }
    Ok(())
}
