use std::sync::Arc;

use mockall::predicate::eq;
use sea_orm::DbErr;

use crate::{
    entities::{categories, expenses, wallets},
    fixtures::TEST_DT,
    store::{self, MockStore, Page},
};

use super::{Authorizer, Error, PageRequest, PaginationConfig};

const ALICE: &str = "alice";
const BOB: &str = "bob";

fn authorizer(store: MockStore) -> Authorizer {
    Authorizer::new(Arc::new(store), PaginationConfig::default())
}

fn wallet(id: i64, owner: &str) -> wallets::Model {
    wallets::Model {
        id,
        owner: owner.to_string(),
        name: String::from("Main"),
        currency: String::from("USD"),
        created_at: *TEST_DT,
    }
}

fn expense(id: i64, wallet_id: i64) -> expenses::Model {
    expenses::Model {
        id,
        wallet_id,
        category_id: None,
        amount: 500,
        expense_description: None,
        expense_date: *TEST_DT,
        created_at: *TEST_DT,
    }
}

fn expect_wallet(store: &mut MockStore, wallet: wallets::Model, times: usize) {
    store.expect_get_wallet()
        .with(eq(wallet.id))
        .times(times)
        .returning(move |_| Ok(wallet.clone()));
}

#[tokio::test]
async fn test_non_positive_ids_never_reach_the_store() {
    let mut store = MockStore::new();
    store.expect_get_wallet().times(0);
    store.expect_get_expense().times(0);
    let authz = authorizer(store);

    for id in [0, -1, i64::MIN] {
        let res = authz.fetch::<wallets::Model>(ALICE, id).await;
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        let res = authz.fetch::<expenses::Model>(ALICE, id).await;
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}

#[tokio::test]
async fn test_empty_principal_is_rejected_before_lookup() {
    let mut store = MockStore::new();
    store.expect_get_wallet().times(0);
    let authz = authorizer(store);

    let res = authz.fetch::<wallets::Model>("", 1).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_owner_receives_stored_row_unchanged() {
    let w1 = wallet(1, ALICE);
    let mut store = MockStore::new();
    expect_wallet(&mut store, w1.clone(), 1);
    let authz = authorizer(store);

    let fetched = authz.fetch::<wallets::Model>(ALICE, 1).await.unwrap();
    assert_eq!(w1, fetched);
}

#[tokio::test]
async fn test_other_principal_is_unauthorized() {
    let mut store = MockStore::new();
    expect_wallet(&mut store, wallet(1, ALICE), 1);
    let authz = authorizer(store);

    let res = authz.fetch::<wallets::Model>(BOB, 1).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_missing_row_is_not_found_for_every_principal() {
    let mut store = MockStore::new();
    store.expect_get_wallet()
        .with(eq(999999))
        .times(2)
        .returning(|_| Err(store::Error::NotFound));
    let authz = authorizer(store);

    for principal in [ALICE, BOB] {
        let res = authz.fetch::<wallets::Model>(principal, 999999).await;
        assert!(matches!(res, Err(Error::NotFound(_))));
    }
}

#[tokio::test]
async fn test_store_failures_pass_through() {
    let mut store = MockStore::new();
    store.expect_get_wallet()
        .times(1)
        .returning(|_| Err(store::Error::DbErr(DbErr::Custom(String::from("connection lost")))));
    let authz = authorizer(store);

    let res = authz.fetch::<wallets::Model>(ALICE, 1).await;
    assert!(matches!(res, Err(Error::StorageError(store::Error::DbErr(_)))));
}

#[tokio::test]
async fn test_repeated_fetches_reread_the_store() {
    let mut store = MockStore::new();
    expect_wallet(&mut store, wallet(3, ALICE), 2);
    let authz = authorizer(store);

    let first = authz.fetch::<wallets::Model>(ALICE, 3).await.unwrap();
    let second = authz.fetch::<wallets::Model>(ALICE, 3).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_child_rows_resolve_owner_through_wallet() {
    let mut store = MockStore::new();
    store.expect_get_expense()
        .with(eq(7))
        .times(2)
        .returning(|id| Ok(expense(id, 1)));
    expect_wallet(&mut store, wallet(1, ALICE), 2);
    let authz = authorizer(store);

    let fetched = authz.fetch::<expenses::Model>(ALICE, 7).await.unwrap();
    assert_eq!(expense(7, 1), fetched);

    let res = authz.fetch::<expenses::Model>(BOB, 7).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_missing_parent_wallet_is_not_masked() {
    let mut store = MockStore::new();
    store.expect_get_expense()
        .times(1)
        .returning(|id| Ok(expense(id, 1)));
    store.expect_get_wallet()
        .with(eq(1))
        .times(1)
        .returning(|_| Err(store::Error::NotFound));
    let authz = authorizer(store);

    let res = authz.fetch::<expenses::Model>(BOB, 7).await;
    assert!(matches!(res, Err(Error::NotFound(msg)) if msg.contains("wallet")));
}

#[tokio::test]
async fn test_shared_rows_are_readable_but_not_writable() {
    let mut store = MockStore::new();
    store.expect_get_category()
        .times(2)
        .returning(|id| Ok(categories::Model {
            id,
            name: String::from("Food"),
            owner: None,
            created_at: *TEST_DT,
        }));
    store.expect_delete_category().times(0);
    let authz = authorizer(store);

    assert!(authz.fetch::<categories::Model>(BOB, 2).await.is_ok());

    let res = authz.delete::<categories::Model>(BOB, 2).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_unauthorized_delete_never_mutates() {
    let mut store = MockStore::new();
    expect_wallet(&mut store, wallet(1, ALICE), 1);
    store.expect_delete_wallet().times(0);
    let authz = authorizer(store);

    let res = authz.delete::<wallets::Model>(BOB, 1).await;
    assert!(matches!(res, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn test_authorized_delete() {
    let mut store = MockStore::new();
    expect_wallet(&mut store, wallet(1, ALICE), 1);
    store.expect_delete_wallet()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(()));
    let authz = authorizer(store);

    authz.delete::<wallets::Model>(ALICE, 1).await.unwrap();
}

#[tokio::test]
async fn test_failed_mutation_is_storage_error() {
    let mut store = MockStore::new();
    expect_wallet(&mut store, wallet(1, ALICE), 1);
    // Deleted concurrently between the check and the delete
    store.expect_delete_wallet()
        .times(1)
        .returning(|_| Err(store::Error::NotFound));
    let authz = authorizer(store);

    let res = authz.delete::<wallets::Model>(ALICE, 1).await;
    assert!(matches!(res, Err(Error::StorageError(store::Error::NotFound))));
}

#[test]
fn test_page_size_bounds() {
    let authz = authorizer(MockStore::new());
    let req = |page_size| PageRequest { page_id: Some(1), page_size: Some(page_size) };

    assert!(matches!(authz.paginate(ALICE, &req(4)), Err(Error::InvalidArgument(_))));
    assert!(matches!(authz.paginate(ALICE, &req(11)), Err(Error::InvalidArgument(_))));
    assert_eq!(Page { limit: 5, offset: 0 }, authz.paginate(ALICE, &req(5)).unwrap());
    assert_eq!(Page { limit: 10, offset: 0 }, authz.paginate(ALICE, &req(10)).unwrap());
}

#[test]
fn test_page_offset_and_required_fields() {
    let authz = authorizer(MockStore::new());

    let page = authz.paginate(ALICE, &PageRequest { page_id: Some(3), page_size: Some(7) }).unwrap();
    assert_eq!(Page { limit: 7, offset: 14 }, page);

    for req in [
        PageRequest { page_id: None, page_size: Some(5) },
        PageRequest { page_id: Some(1), page_size: None },
        PageRequest { page_id: Some(0), page_size: Some(5) },
        PageRequest { page_id: Some(-2), page_size: Some(5) },
        PageRequest { page_id: Some(i64::MAX), page_size: Some(10) },
    ] {
        assert!(matches!(authz.paginate(ALICE, &req), Err(Error::InvalidArgument(_))));
    }
}
