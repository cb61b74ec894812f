use axum::{extract::State, routing::get, Json, Router};

use crate::{
    access::Result,
    auth::middleware::AuthUser,
    extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};

use super::{
    models::{CreateExpenseModel, ExpenseResponseModel, ListExpensesQuery, UpdateExpenseModel},
    DynExpenseService,
};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense).delete(delete_expense))
        .with_state(app_state)
}

pub async fn create_expense(
    user: AuthUser,
    State(expense_svc): State<DynExpenseService>,
    JsonBody(body): JsonBody<CreateExpenseModel>,
) -> Result<Json<ExpenseResponseModel>> {
    Ok(Json(expense_svc.create_expense(&user.username, body).await?))
}

pub async fn get_expense(
    user: AuthUser,
    State(expense_svc): State<DynExpenseService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<ExpenseResponseModel>> {
    Ok(Json(expense_svc.get_expense(&user.username, id).await?))
}

pub async fn list_expenses(
    user: AuthUser,
    State(expense_svc): State<DynExpenseService>,
    QueryParams(query): QueryParams<ListExpensesQuery>,
) -> Result<Json<Vec<ExpenseResponseModel>>> {
    Ok(Json(expense_svc.list_expenses(&user.username, query).await?))
}

pub async fn update_expense(
    user: AuthUser,
    State(expense_svc): State<DynExpenseService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateExpenseModel>,
) -> Result<Json<ExpenseResponseModel>> {
    Ok(Json(expense_svc.update_expense(&user.username, id, body).await?))
}

pub async fn delete_expense(
    user: AuthUser,
    State(expense_svc): State<DynExpenseService>,
    PathParam(id): PathParam<i64>,
) -> Result<()> {
    expense_svc.delete_expense(&user.username, id).await
}
