use sea_orm::{DbConn, EntityTrait};

use crate::{
    access::{Authorizer, Error, PageRequest, PaginationConfig},
    entities::prelude::*,
    fixtures::{create_test_store, Fixtures},
    store::DynStore,
};

use super::{CreateBudgetModel, DynBudgetService, StoreBudgetService, UpdateBudgetModel};

async fn create_test_service() -> anyhow::Result<(DynBudgetService, DynStore, DbConn)> {
    let (store, db) = create_test_store().await?;
    let authz = Authorizer::new(store.clone(), PaginationConfig::default());
    Ok((StoreBudgetService::new_dyn(authz, store.clone()), store, db))
}

#[tokio::test]
async fn test_create_budget() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let wallet = fx.wallet(&store, &alice.username).await?;
    let cat = fx.category(&store, None).await?;

    let budget = svc.create_budget(&alice.username, CreateBudgetModel {
        wallet_id: wallet.id,
        category_id: cat.id,
        amount: 50000,
    }).await?;

    let db_budget = Budgets::find_by_id(budget.id).one(&db).await?.unwrap();
    assert_eq!(wallet.id, db_budget.wallet_id);
    assert_eq!(cat.id, db_budget.category_id);
    assert_eq!(50000, db_budget.amount);

    Ok(())
}

#[tokio::test]
async fn test_create_budget_rejections() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let alice_wallet = fx.wallet(&store, &alice.username).await?;
    let bob_cat = fx.category(&store, Some(&bob.username)).await?;
    let global = fx.category(&store, None).await?;

    // Foreign wallet
    let res = svc.create_budget(&bob.username, CreateBudgetModel {
        wallet_id: alice_wallet.id,
        category_id: global.id,
        amount: 100,
    }).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));

    // Foreign category
    let res = svc.create_budget(&alice.username, CreateBudgetModel {
        wallet_id: alice_wallet.id,
        category_id: bob_cat.id,
        amount: 100,
    }).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));

    let res = svc.create_budget(&alice.username, CreateBudgetModel {
        wallet_id: alice_wallet.id,
        category_id: global.id,
        amount: -100,
    }).await;
    assert!(matches!(res, Err(Error::StorageError(_))));

    assert!(Budgets::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_get_and_list_budgets() -> anyhow::Result<()> {
    let (svc, store, _db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let cat = fx.category(&store, None).await?;
    let alice_wallet = fx.wallet(&store, &alice.username).await?;
    let bob_wallet = fx.wallet(&store, &bob.username).await?;

    let budget = fx.budget(&store, alice_wallet.id, cat.id).await?;
    for _ in 0..3 {
        fx.budget(&store, bob_wallet.id, cat.id).await?;
    }

    assert_eq!(budget.id, svc.get_budget(&alice.username, budget.id).await?.id);
    assert!(matches!(svc.get_budget(&bob.username, budget.id).await, Err(Error::Unauthorized(_))));

    let page = PageRequest { page_id: Some(1), page_size: Some(10) };
    let budgets = svc.list_budgets(&alice.username, page).await?;
    assert_eq!(vec![budget.id], budgets.iter().map(|b| b.id).collect::<Vec<_>>());
    assert_eq!(3, svc.list_budgets(&bob.username, page).await?.len());

    Ok(())
}

#[tokio::test]
async fn test_update_and_delete_budget() -> anyhow::Result<()> {
    let (svc, store, db) = create_test_service().await?;
    let mut fx = Fixtures::new();
    let alice = fx.user(&store).await?;
    let bob = fx.user(&store).await?;
    let cat = fx.category(&store, None).await?;
    let wallet = fx.wallet(&store, &alice.username).await?;
    let budget = fx.budget(&store, wallet.id, cat.id).await?;

    let res = svc.update_budget(&bob.username, budget.id, UpdateBudgetModel {
        amount: Some(1),
        ..Default::default()
    }).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));

    let updated = svc.update_budget(&alice.username, budget.id, UpdateBudgetModel {
        amount: Some(12345),
        ..Default::default()
    }).await?;
    assert_eq!(12345, updated.amount);
    assert_eq!(cat.id, updated.category_id);

    let res = svc.delete_budget(&bob.username, budget.id).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));

    svc.delete_budget(&alice.username, budget.id).await?;
    assert!(Budgets::find_by_id(budget.id).one(&db).await?.is_none());

    Ok(())
}
