use async_trait::async_trait;

use crate::{
    entities::{budgets, categories, expenses, users, wallets},
    store::{self, DynStore},
};

use super::{Owner, Resource};

#[async_trait]
impl Resource for users::Model {
    const KIND: &'static str = "user";

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self> {
        store.get_user(id).await
    }
    async fn remove(store: &DynStore, id: i64) -> store::Result<()> {
        store.delete_user(id).await
    }
    fn owner(&self) -> Owner<'_> {
        Owner::Principal(&self.username)
    }
}

#[async_trait]
impl Resource for wallets::Model {
    const KIND: &'static str = "wallet";

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self> {
        store.get_wallet(id).await
    }
    async fn remove(store: &DynStore, id: i64) -> store::Result<()> {
        store.delete_wallet(id).await
    }
    fn owner(&self) -> Owner<'_> {
        Owner::Principal(&self.owner)
    }
}

#[async_trait]
impl Resource for categories::Model {
    const KIND: &'static str = "category";

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self> {
        store.get_category(id).await
    }
    async fn remove(store: &DynStore, id: i64) -> store::Result<()> {
        store.delete_category(id).await
    }
    fn owner(&self) -> Owner<'_> {
        match &self.owner {
            Some(owner) => Owner::Principal(owner),
            None => Owner::Shared,
        }
    }
}

#[async_trait]
impl Resource for expenses::Model {
    const KIND: &'static str = "expense";

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self> {
        store.get_expense(id).await
    }
    async fn remove(store: &DynStore, id: i64) -> store::Result<()> {
        store.delete_expense(id).await
    }
    fn owner(&self) -> Owner<'_> {
        Owner::Wallet(self.wallet_id)
    }
}

#[async_trait]
impl Resource for budgets::Model {
    const KIND: &'static str = "budget";

    async fn fetch(store: &DynStore, id: i64) -> store::Result<Self> {
        store.get_budget(id).await
    }
    async fn remove(store: &DynStore, id: i64) -> store::Result<()> {
        store.delete_budget(id).await
    }
    fn owner(&self) -> Owner<'_> {
        Owner::Wallet(self.wallet_id)
    }
}
