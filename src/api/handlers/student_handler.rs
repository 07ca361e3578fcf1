//! Student handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{Path, Query, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewStudent, Student, StudentChanges, StudentResponse};
use crate::errors::AppResult;
use crate::services::StudentListing;
use crate::types::StudentPage;

/// Student listing query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentQuery {
    /// 1-indexed page; omit to list every student
    pub page: Option<u64>,
    /// Case-insensitive name filter, paginated listing only
    #[serde(rename = "searchStudent")]
    pub search_student: Option<String>,
}

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
}

/// List students
#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    params(StudentQuery),
    responses(
        (status = 200, description = "A page of students ordered by name, or every student when no page is given", body = StudentPage),
        (status = 401, description = "Not authenticated or not an administrator")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> AppResult<Json<StudentListing>> {
    let listing = state
        .student_service
        .list(query.page, query.search_student)
        .await?;

    Ok(Json(listing))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 400, description = "Student does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Student>> {
    Ok(Json(state.student_service.get(id).await?))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = NewStudent,
    responses(
        (status = 200, description = "Student registered", body = StudentResponse),
        (status = 400, description = "Validation fails or e-mail already registered")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewStudent>,
) -> AppResult<Json<StudentResponse>> {
    Ok(Json(state.student_service.create(payload).await?))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = StudentChanges,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Validation fails, student does not exist or e-mail already registered")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<StudentChanges>,
) -> AppResult<Json<StudentResponse>> {
    Ok(Json(state.student_service.update(id, payload).await?))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted student", body = Student),
        (status = 400, description = "Student does not exist")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Student>> {
    Ok(Json(state.student_service.delete(id).await?))
}
