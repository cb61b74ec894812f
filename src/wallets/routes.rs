use axum::{extract::State, routing::get, Json, Router};

use crate::{
    access::{PageRequest, Result},
    auth::middleware::AuthUser,
    extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};

use super::{
    models::{CreateWalletRequestModel, UpdateWalletRequestModel, WalletResponseModel},
    DynWalletService,
};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/wallets", get(list_wallets).post(create_wallet))
        .route("/wallets/{id}", get(get_wallet).put(update_wallet).delete(delete_wallet))
        .with_state(app_state)
}

pub async fn create_wallet(
    user: AuthUser,
    State(wallet_svc): State<DynWalletService>,
    JsonBody(body): JsonBody<CreateWalletRequestModel>,
) -> Result<Json<WalletResponseModel>> {
    Ok(Json(wallet_svc.create_wallet(&user.username, body).await?))
}

pub async fn get_wallet(
    user: AuthUser,
    State(wallet_svc): State<DynWalletService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<WalletResponseModel>> {
    Ok(Json(wallet_svc.get_wallet(&user.username, id).await?))
}

pub async fn list_wallets(
    user: AuthUser,
    State(wallet_svc): State<DynWalletService>,
    QueryParams(page): QueryParams<PageRequest>,
) -> Result<Json<Vec<WalletResponseModel>>> {
    Ok(Json(wallet_svc.list_wallets(&user.username, page).await?))
}

pub async fn update_wallet(
    user: AuthUser,
    State(wallet_svc): State<DynWalletService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateWalletRequestModel>,
) -> Result<Json<WalletResponseModel>> {
    Ok(Json(wallet_svc.update_wallet(&user.username, id, body).await?))
}

pub async fn delete_wallet(
    user: AuthUser,
    State(wallet_svc): State<DynWalletService>,
    PathParam(id): PathParam<i64>,
) -> Result<()> {
    wallet_svc.delete_wallet(&user.username, id).await
}
