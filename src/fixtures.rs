//! Shared test data: an in-memory database built from the entities and a
//! seeded random generator. Set `FIXTURE_SEED` to replay a run.

use std::{env, sync::Arc};

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{Database, DbConn};

use crate::{
    db_utils::create_schema,
    entities::{budgets, categories, expenses, users, wallets},
    store::{
        CreateBudgetParams, CreateCategoryParams, CreateExpenseParams, CreateUserParams,
        CreateWalletParams, DbConnStore, DynStore,
    },
    utils::date_time_provider::{DynDateTimeProvider, MockDateTimeProvider},
    validations::CURRENCIES,
};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DEFAULT_SEED: u64 = 0x5eed_f00d;

lazy_static! {
    // 2024-11-10 12:03:34
    pub static ref TEST_DT: DateTime<Utc> = DateTime::<Utc>::from_timestamp_millis(1731240214000).unwrap();
}

pub struct Fixtures {
    rng: StdRng,
}

impl Fixtures {
    pub fn new() -> Self {
        let seed = env::var("FIXTURE_SEED")
            .ok()
            .and_then(|seed| seed.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }

    pub fn string(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    pub fn username(&mut self) -> String {
        self.string(6)
    }

    pub fn email(&mut self) -> String {
        format!("{}@gmail.com", self.string(6))
    }

    pub fn password(&mut self) -> String {
        self.string(8)
    }

    pub fn amount(&mut self) -> i64 {
        self.int(100, 1000)
    }

    pub fn currency(&mut self) -> String {
        CURRENCIES[self.rng.gen_range(0..CURRENCIES.len())].to_string()
    }

    pub async fn user(&mut self, store: &DynStore) -> anyhow::Result<users::Model> {
        Ok(
            store.create_user(CreateUserParams {
                username: self.username(),
                email: self.email(),
                hashed_password: self.password(),
                currency: self.currency(),
            }).await?
        )
    }

    pub async fn wallet(&mut self, store: &DynStore, owner: &str) -> anyhow::Result<wallets::Model> {
        Ok(
            store.create_wallet(CreateWalletParams {
                owner: owner.to_string(),
                name: self.string(8),
                currency: self.currency(),
            }).await?
        )
    }

    pub async fn category(
        &mut self,
        store: &DynStore,
        owner: Option<&str>,
    ) -> anyhow::Result<categories::Model> {
        Ok(
            store.create_category(CreateCategoryParams {
                name: self.string(8),
                owner: owner.map(str::to_string),
            }).await?
        )
    }

    pub async fn expense(
        &mut self,
        store: &DynStore,
        wallet_id: i64,
        category_id: Option<i64>,
    ) -> anyhow::Result<expenses::Model> {
        Ok(
            store.create_expense(CreateExpenseParams {
                wallet_id,
                category_id,
                amount: self.amount(),
                expense_description: Some(self.string(12)),
                expense_date: *TEST_DT,
            }).await?
        )
    }

    pub async fn budget(
        &mut self,
        store: &DynStore,
        wallet_id: i64,
        category_id: i64,
    ) -> anyhow::Result<budgets::Model> {
        Ok(
            store.create_budget(CreateBudgetParams {
                wallet_id,
                category_id,
                amount: self.amount(),
            }).await?
        )
    }
}

pub fn mock_dt_provider() -> DynDateTimeProvider {
    let mut mock_dt_provider = MockDateTimeProvider::new();
    mock_dt_provider.expect_utc_now().returning(|| *TEST_DT);
    Arc::new(mock_dt_provider)
}

pub async fn create_test_db() -> anyhow::Result<DbConn> {
    // In-memory Sqlite connection
    let db = Database::connect("sqlite::memory:").await?;
    create_schema(&db).await?;
    Ok(db)
}

pub async fn create_test_store() -> anyhow::Result<(DynStore, DbConn)> {
    let db = create_test_db().await?;
    let store = DbConnStore::new_dyn(db.clone(), mock_dt_provider());
    Ok((store, db))
}
