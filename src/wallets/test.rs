use sea_orm::{DbConn, EntityTrait};

use crate::{
    access::{Authorizer, Error, PageRequest, PaginationConfig},
    entities::prelude::*,
    fixtures::{create_test_store, Fixtures, TEST_DT},
    store::DynStore,
};

use super::{
    CreateWalletRequestModel, DynWalletService, StoreWalletService, UpdateWalletRequestModel,
};

async fn create_test_service() -> anyhow::Result<(DynWalletService, DynStore, DbConn)> {
    let (store, db) = create_test_store().await?;
    let authz = Authorizer::new(store.clone(), PaginationConfig::default());
    Ok((StoreWalletService::new_dyn(authz, store.clone()), store, db))
}

fn page(page_id: i64, page_size: i64) -> PageRequest {
    PageRequest { page_id: Some(page_id), page_size: Some(page_size) }
}

#[tokio::test]
async fn test_create_wallet_owned_by_principal() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;

    let wallet = svc.create_wallet(&alice.username, CreateWalletRequestModel {
        name: String::from("  Main "),
        currency: String::from("USD"),
        owner: None,
    }).await?;

    assert_eq!(alice.username, wallet.owner);
    assert_eq!("Main", wallet.name);
    assert_eq!(*TEST_DT, wallet.created_at);

    let db_wallet = Wallets::find_by_id(wallet.id).one(&db).await?.unwrap();
    assert_eq!(alice.username, db_wallet.owner);

    Ok(())
}

#[tokio::test]
async fn test_create_wallet_rejects_client_owner() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;

    let res = svc.create_wallet(&alice.username, CreateWalletRequestModel {
        name: String::from("Sneaky"),
        currency: String::from("USD"),
        owner: Some(bob.username),
    }).await;
    assert!(matches!(res, Err(Error::InvalidArgument(_))));

    let res = svc.create_wallet(&alice.username, CreateWalletRequestModel {
        name: String::from("Main"),
        currency: String::from("XYZ"),
        owner: None,
    }).await;
    assert!(matches!(res, Err(Error::InvalidArgument(_))));

    assert!(Wallets::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_get_wallet() -> anyhow::Result<()> {
    let (svc, store, _db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let wallet = fx.wallet(&store, &alice.username).await?;

    assert_eq!(wallet.id, svc.get_wallet(&alice.username, wallet.id).await?.id);
    assert!(matches!(svc.get_wallet(&bob.username, wallet.id).await, Err(Error::Unauthorized(_))));
    assert!(matches!(svc.get_wallet(&bob.username, 999999).await, Err(Error::NotFound(_))));
    assert!(matches!(svc.get_wallet(&alice.username, 0).await, Err(Error::InvalidArgument(_))));

    Ok(())
}

#[tokio::test]
async fn test_list_wallets_only_returns_own_rows() -> anyhow::Result<()> {
    let (svc, store, _db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    for _ in 0..3 {
        fx.wallet(&store, &alice.username).await?;
    }
    for _ in 0..10 {
        fx.wallet(&store, &bob.username).await?;
    }

    let wallets = svc.list_wallets(&alice.username, page(1, 5)).await?;
    assert_eq!(3, wallets.len());
    assert!(wallets.iter().all(|w| w.owner == alice.username));

    let wallets = svc.list_wallets(&bob.username, page(2, 5)).await?;
    assert_eq!(5, wallets.len());
    assert!(svc.list_wallets(&bob.username, page(3, 5)).await?.is_empty());

    let res = svc.list_wallets(&alice.username, page(1, 11)).await;
    assert!(matches!(res, Err(Error::InvalidArgument(_))));

    Ok(())
}

#[tokio::test]
async fn test_update_wallet() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let wallet = fx.wallet(&store, &alice.username).await?;

    let res = svc.update_wallet(&bob.username, wallet.id, UpdateWalletRequestModel {
        name: Some(String::from("Mine now")),
        ..Default::default()
    }).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));

    let res = svc.update_wallet(&alice.username, wallet.id, UpdateWalletRequestModel {
        owner: Some(bob.username.clone()),
        ..Default::default()
    }).await;
    assert!(matches!(res, Err(Error::InvalidArgument(_))));

    let updated = svc.update_wallet(&alice.username, wallet.id, UpdateWalletRequestModel {
        currency: Some(String::from("RUB")),
        ..Default::default()
    }).await?;
    assert_eq!("RUB", updated.currency);
    assert_eq!(wallet.name, updated.name);

    let db_wallet = Wallets::find_by_id(wallet.id).one(&db).await?.unwrap();
    assert_eq!(alice.username, db_wallet.owner);
    assert_eq!("RUB", db_wallet.currency);

    Ok(())
}

#[tokio::test]
async fn test_delete_wallet() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let wallet = fx.wallet(&store, &alice.username).await?;

    let res = svc.delete_wallet(&bob.username, wallet.id).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
    assert!(Wallets::find_by_id(wallet.id).one(&db).await?.is_some());

    svc.delete_wallet(&alice.username, wallet.id).await?;
    assert!(Wallets::find_by_id(wallet.id).one(&db).await?.is_none());

    let res = svc.delete_wallet(&alice.username, wallet.id).await;
    assert!(matches!(res, Err(Error::NotFound(_))));

    Ok(())
}
