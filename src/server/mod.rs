//! Assembles services into [`AppState`] and mounts every router under
//! `/api/v1`.


use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    access::{Authorizer, PaginationConfig},
    auth::{self, password_hasher::DynPasswordHasher, token_service::DynTokenService, CoreAuthService},
    budgets::{self, StoreBudgetService},
    categories::{self, StoreCategoryService},
    expenses::{self, StoreExpenseService},
    state::AppState,
    store::DynStore,
    users::{self, StoreUserService},
    utils::date_time_provider::DynDateTimeProvider,
    wallets::{self, StoreWalletService},
};

pub fn build_state(
    store: DynStore,
    token_svc: DynTokenService,
    password_hasher: DynPasswordHasher,
    dt_provider: DynDateTimeProvider,
    pagination: PaginationConfig,
) -> AppState {
    let authz = Authorizer::new(store.clone(), pagination);

    AppState {
        auth_svc: CoreAuthService::new_dyn(store.clone(), token_svc.clone(), password_hasher.clone()),
        token_svc,
        user_svc: StoreUserService::new_dyn(authz.clone(), store.clone(), password_hasher),
        wallet_svc: StoreWalletService::new_dyn(authz.clone(), store.clone()),
        cat_svc: StoreCategoryService::new_dyn(authz.clone(), store.clone()),
        expense_svc: StoreExpenseService::new_dyn(authz.clone(), store.clone(), dt_provider),
        budget_svc: StoreBudgetService::new_dyn(authz, store),
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .nest(
            "/api/v1",
            Router::new()
                .merge(auth::routes::routes(app_state.clone()))
                .merge(users::routes::routes(app_state.clone()))
                .merge(wallets::routes::routes(app_state.clone()))
                .merge(categories::routes::routes(app_state.clone()))
                .merge(expenses::routes::routes(app_state.clone()))
                .merge(budgets::routes::routes(app_state))
        )
        .layer(TraceLayer::new_for_http())
}
