//! Enrollment handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Enrollment, EnrollmentDetails, EnrollmentRequest};
use crate::errors::AppResult;

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route(
            "/:id",
            get(get_enrollment)
                .put(update_enrollment)
                .delete(delete_enrollment),
        )
}

/// List enrollments, soonest to end first
#[utoipa::path(
    get,
    path = "/enrollments",
    tag = "Enrollments",
    responses((status = 200, description = "Every enrollment with student name and plan title", body = Vec<EnrollmentDetails>)),
    security(("bearer_auth" = []))
)]
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EnrollmentDetails>>> {
    Ok(Json(state.enrollment_service.list().await?))
}

/// Get an enrollment by id
#[utoipa::path(
    get,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Enrollment found", body = Enrollment),
        (status = 400, description = "Enrollment does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Enrollment>> {
    Ok(Json(state.enrollment_service.get(id).await?))
}

/// Enroll a student in a plan
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = "Enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Enrollment created with computed end date and price", body = Enrollment),
        (status = 400, description = "Validation fails, unknown student or plan, or past start date")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_enrollment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EnrollmentRequest>,
) -> AppResult<Json<Enrollment>> {
    Ok(Json(state.enrollment_service.create(payload).await?))
}

/// Replace an enrollment
#[utoipa::path(
    put,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Enrollment id")),
    request_body = EnrollmentRequest,
    responses(
        (status = 200, description = "Enrollment updated and repriced", body = Enrollment),
        (status = 400, description = "Validation fails, unknown enrollment, student or plan, or past start date")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<EnrollmentRequest>,
) -> AppResult<Json<Enrollment>> {
    Ok(Json(state.enrollment_service.update(id, payload).await?))
}

/// Delete an enrollment
#[utoipa::path(
    delete,
    path = "/enrollments/{id}",
    tag = "Enrollments",
    params(("id" = i32, Path, description = "Enrollment id")),
    responses(
        (status = 200, description = "Deleted enrollment", body = Enrollment),
        (status = 400, description = "Enrollment does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Enrollment>> {
    Ok(Json(state.enrollment_service.delete(id).await?))
}
