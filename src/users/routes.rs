use axum::{extract::State, routing::{get, post}, Json, Router};

use crate::{
    auth::middleware::AuthUser,
    extract::{JsonBody, PathParam},
    state::AppState,
};

use super::{
    error::Result,
    models::{CreateUserRequestModel, UpdateUserRequestModel, UserResponseModel},
    DynUserService,
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(state)
}

async fn create_user(
    State(user_svc): State<DynUserService>,
    JsonBody(body): JsonBody<CreateUserRequestModel>,
) -> Result<Json<UserResponseModel>> {
    Ok(Json(user_svc.create_user(body).await?))
}

async fn get_user(
    user: AuthUser,
    State(user_svc): State<DynUserService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<UserResponseModel>> {
    Ok(Json(user_svc.get_user(&user.username, id).await?))
}

async fn update_user(
    user: AuthUser,
    State(user_svc): State<DynUserService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateUserRequestModel>,
) -> Result<Json<UserResponseModel>> {
    Ok(Json(user_svc.update_user(&user.username, id, body).await?))
}

async fn delete_user(
    user: AuthUser,
    State(user_svc): State<DynUserService>,
    PathParam(id): PathParam<i64>,
) -> Result<()> {
    user_svc.delete_user(&user.username, id).await?;
    Ok(())
}
