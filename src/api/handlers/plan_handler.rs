//! Plan handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewPlan, Plan, PlanChanges};
use crate::errors::AppResult;

pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:id", get(get_plan).put(update_plan).delete(delete_plan))
}

/// List plans
#[utoipa::path(
    get,
    path = "/plans",
    tag = "Plans",
    responses((status = 200, description = "Every plan", body = Vec<Plan>)),
    security(("bearer_auth" = []))
)]
pub async fn list_plans(State(state): State<AppState>) -> AppResult<Json<Vec<Plan>>> {
    Ok(Json(state.plan_service.list().await?))
}

/// Get a plan by id
#[utoipa::path(
    get,
    path = "/plans/{id}",
    tag = "Plans",
    params(("id" = i32, Path, description = "Plan id")),
    responses(
        (status = 200, description = "Plan found", body = Plan),
        (status = 400, description = "Plan does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_plan(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Plan>> {
    Ok(Json(state.plan_service.get(id).await?))
}

/// Create a plan
#[utoipa::path(
    post,
    path = "/plans",
    tag = "Plans",
    request_body = NewPlan,
    responses(
        (status = 200, description = "Plan created", body = Plan),
        (status = 400, description = "Validation fails")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_plan(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewPlan>,
) -> AppResult<Json<Plan>> {
    Ok(Json(state.plan_service.create(payload).await?))
}

/// Update a plan
#[utoipa::path(
    put,
    path = "/plans/{id}",
    tag = "Plans",
    params(("id" = i32, Path, description = "Plan id")),
    request_body = PlanChanges,
    responses(
        (status = 200, description = "Plan updated", body = Plan),
        (status = 400, description = "Plan does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PlanChanges>,
) -> AppResult<Json<Plan>> {
    Ok(Json(state.plan_service.update(id, payload).await?))
}

/// Delete a plan
#[utoipa::path(
    delete,
    path = "/plans/{id}",
    tag = "Plans",
    params(("id" = i32, Path, description = "Plan id")),
    responses(
        (status = 200, description = "Deleted plan", body = Plan),
        (status = 400, description = "Plan does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Plan>> {
    Ok(Json(state.plan_service.delete(id).await?))
}
