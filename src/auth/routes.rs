use axum::{extract::State, routing::post, Json, Router};

use crate::{extract::JsonBody, state::AppState};

use super::{error::Result, models::{LoginRequestModel, LoginResponseModel}, DynAuthService};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .with_state(app_state)
}

pub async fn login(
    State(auth_svc): State<DynAuthService>,
    JsonBody(req): JsonBody<LoginRequestModel>,
) -> Result<Json<LoginResponseModel>> {
    Ok(Json(auth_svc.login(req).await?))
}
