//! Admin gate. Runs after `auth_middleware`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::CurrentUser;
use crate::api::AppState;
use crate::errors::AppError;

pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let current = request
        .extensions()
        .get::<CurrentUser>()
        .copied()
        .ok_or(AppError::Unauthorized)?;

    if let Err(e) = state.auth_service.ensure_admin(current.id).await {
        tracing::warn!(user_id = current.id, "Admin gate refused request");
        return Err(e);
    }

    Ok(next.run(request).await)
}
