use axum_macros::FromRef;

use crate::{
    auth::{token_service::DynTokenService, DynAuthService},
    budgets::DynBudgetService,
    categories::DynCategoryService,
    expenses::DynExpenseService,
    users::DynUserService,
    wallets::DynWalletService,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth_svc: DynAuthService,
    pub token_svc: DynTokenService,
    pub user_svc: DynUserService,
    pub wallet_svc: DynWalletService,
    pub cat_svc: DynCategoryService,
    pub expense_svc: DynExpenseService,
    pub budget_svc: DynBudgetService,
}
