use axum::{extract::State, routing::get, Json, Router};

use crate::{
    access::{PageRequest, Result},
    auth::middleware::AuthUser,
    extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};

use super::{
    models::{BudgetResponseModel, CreateBudgetModel, UpdateBudgetModel},
    DynBudgetService,
};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/{id}", get(get_budget).put(update_budget).delete(delete_budget))
        .with_state(app_state)
}

pub async fn create_budget(
    user: AuthUser,
    State(budget_svc): State<DynBudgetService>,
    JsonBody(body): JsonBody<CreateBudgetModel>,
) -> Result<Json<BudgetResponseModel>> {
    Ok(Json(budget_svc.create_budget(&user.username, body).await?))
}

pub async fn get_budget(
    user: AuthUser,
    State(budget_svc): State<DynBudgetService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<BudgetResponseModel>> {
    Ok(Json(budget_svc.get_budget(&user.username, id).await?))
}

pub async fn list_budgets(
    user: AuthUser,
    State(budget_svc): State<DynBudgetService>,
    QueryParams(page): QueryParams<PageRequest>,
) -> Result<Json<Vec<BudgetResponseModel>>> {
    Ok(Json(budget_svc.list_budgets(&user.username, page).await?))
}

pub async fn update_budget(
    user: AuthUser,
    State(budget_svc): State<DynBudgetService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateBudgetModel>,
) -> Result<Json<BudgetResponseModel>> {
    Ok(Json(budget_svc.update_budget(&user.username, id, body).await?))
}

pub async fn delete_budget(
    user: AuthUser,
    State(budget_svc): State<DynBudgetService>,
    PathParam(id): PathParam<i64>,
) -> Result<()> {
    budget_svc.delete_budget(&user.username, id).await
}
