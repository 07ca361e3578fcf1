//! Enrollment domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Schema};

/// A student signed up to a plan for a priced, dated period.
///
/// References are nullable: removing a student or plan leaves its
/// enrollments in place with the reference cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Enrollment {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub student_id: Option<i32>,
    #[schema(example = 1)]
    pub plan_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Total price for the whole period
    #[schema(example = 327.0)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enrollment create/update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EnrollmentRequest {
    #[schema(example = "2030-01-10T00:00:00Z")]
    pub start_date: DateTime<Utc>,
    #[schema(example = 1)]
    pub student_id: i32,
    #[schema(example = 1)]
    pub plan_id: i32,
}

impl Schema for EnrollmentRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("start_date", FieldKind::Date),
        FieldSpec::required("student_id", FieldKind::Integer),
        FieldSpec::required("plan_id", FieldKind::Integer),
    ];
}

/// Fully computed enrollment, as handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnrollment {
    pub student_id: i32,
    pub plan_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
}

/// Student name as shown in enrollment listings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StudentName {
    pub name: String,
}

/// Plan title as shown in enrollment listings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PlanTitle {
    pub title: String,
}

/// Read-only enrollment projection joined with student name and plan title
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EnrollmentDetails {
    pub id: i32,
    pub student_id: Option<i32>,
    pub plan_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub student: Option<StudentName>,
    pub plan: Option<PlanTitle>,
}

impl EnrollmentDetails {
    pub fn new(
        enrollment: Enrollment,
        student: Option<StudentName>,
        plan: Option<PlanTitle>,
    ) -> Self {
        Self {
            id: enrollment.id,
            student_id: enrollment.student_id,
            plan_id: enrollment.plan_id,
            start_date: enrollment.start_date,
            end_date: enrollment.end_date,
            price: enrollment.price,
            created_at: enrollment.created_at,
            updated_at: enrollment.updated_at,
            student,
            plan,
        }
    }
}
