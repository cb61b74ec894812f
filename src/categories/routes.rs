use axum::{extract::State, routing::get, Json, Router};

use crate::{
    access::{PageRequest, Result},
    auth::middleware::AuthUser,
    extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};

use super::{CreateCategoryModel, DynCategoryService, GetCategoryModel, UpdateCategoryModel};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories).post(post_category))
        .route("/categories/{id}", get(get_category).put(update_category).delete(delete_category))
        .with_state(app_state)
}

pub async fn get_categories(
    user: AuthUser,
    State(cat_svc): State<DynCategoryService>,
    QueryParams(page): QueryParams<PageRequest>,
) -> Result<Json<Vec<GetCategoryModel>>> {
    Ok(Json(cat_svc.get_cats(&user.username, page).await?))
}

pub async fn get_category(
    user: AuthUser,
    State(cat_svc): State<DynCategoryService>,
    PathParam(id): PathParam<i64>,
) -> Result<Json<GetCategoryModel>> {
    Ok(Json(cat_svc.get_cat(&user.username, id).await?))
}

pub async fn post_category(
    user: AuthUser,
    State(cat_svc): State<DynCategoryService>,
    JsonBody(body): JsonBody<CreateCategoryModel>,
) -> Result<Json<GetCategoryModel>> {
    Ok(Json(cat_svc.create_cat(&user.username, body).await?))
}

pub async fn update_category(
    user: AuthUser,
    State(cat_svc): State<DynCategoryService>,
    PathParam(id): PathParam<i64>,
    JsonBody(body): JsonBody<UpdateCategoryModel>,
) -> Result<Json<GetCategoryModel>> {
    Ok(Json(cat_svc.update_cat(&user.username, id, body).await?))
}

pub async fn delete_category(
    user: AuthUser,
    State(cat_svc): State<DynCategoryService>,
    PathParam(id): PathParam<i64>,
) -> Result<()> {
    cat_svc.delete_cat(&user.username, id).await
}
