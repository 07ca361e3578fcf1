//! OpenAPI documentation served through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{enrollment_handler, plan_handler, session_handler, student_handler};
use crate::api::routes::{self, HealthResponse};
use crate::domain::{
    Enrollment, EnrollmentDetails, EnrollmentRequest, NewPlan, NewStudent, Plan, PlanChanges,
    PlanTitle, SessionRequest, SessionUser, Student, StudentChanges, StudentName,
    StudentResponse,
};
use crate::services::SessionResponse;
use crate::types::StudentPage;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gympoint",
        version = "0.1.0",
        description = "Gym management API: students, plans and enrollments"
    ),
    servers(
        (url = "http://localhost:3333", description = "Local development server")
    ),
    paths(
        routes::health,
        session_handler::create_session,
        student_handler::list_students,
        student_handler::get_student,
        student_handler::create_student,
        student_handler::update_student,
        student_handler::delete_student,
        plan_handler::list_plans,
        plan_handler::get_plan,
        plan_handler::create_plan,
        plan_handler::update_plan,
        plan_handler::delete_plan,
        enrollment_handler::list_enrollments,
        enrollment_handler::get_enrollment,
        enrollment_handler::create_enrollment,
        enrollment_handler::update_enrollment,
        enrollment_handler::delete_enrollment,
    ),
    components(
        schemas(
            HealthResponse,
            SessionRequest,
            SessionUser,
            SessionResponse,
            Student,
            NewStudent,
            StudentChanges,
            StudentResponse,
            StudentPage,
            Plan,
            NewPlan,
            PlanChanges,
            Enrollment,
            EnrollmentRequest,
            EnrollmentDetails,
            StudentName,
            PlanTitle,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness and database reachability"),
        (name = "Sessions", description = "Staff sign in"),
        (name = "Students", description = "Student management (administrators only)"),
        (name = "Plans", description = "Plan management (administrators only)"),
        (name = "Enrollments", description = "Enrollment management (administrators only)")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token obtained from POST /sessions"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_management_path_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/sessions",
            "/students",
            "/students/{id}",
            "/plans",
            "/plans/{id}",
            "/enrollments",
            "/enrollments/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
