//! Session handler.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::SessionRequest;
use crate::errors::AppResult;
use crate::services::SessionResponse;

pub fn session_routes() -> Router<AppState> {
    Router::new().route("/", post(create_session))
}

/// Sign in and get a bearer token
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 400, description = "Validation fails"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SessionRequest>,
) -> AppResult<Json<SessionResponse>> {
    Ok(Json(state.auth_service.create_session(payload).await?))
}
