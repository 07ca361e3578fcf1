//! Enrollment service - signs students up to plans.
//!
//! Create and update share one path: both referenced records must exist,
//! the start date may not be in the past, and the end date and total price
//! are always recomputed from the plan.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::config::PAST_DATE_NOT_PERMITTED;
use crate::domain::{
    compute, Enrollment, EnrollmentDetails, EnrollmentRequest, NewEnrollment,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{EnrollmentRepository, PlanRepository, StudentRepository};

#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// All enrollments ordered by end date, with student name and plan title
    async fn list(&self) -> AppResult<Vec<EnrollmentDetails>>;

    async fn get(&self, id: i32) -> AppResult<Enrollment>;

    async fn create(&self, request: EnrollmentRequest) -> AppResult<Enrollment>;

    async fn update(&self, id: i32, request: EnrollmentRequest) -> AppResult<Enrollment>;

    /// Delete an enrollment, returning the record as it was.
    async fn delete(&self, id: i32) -> AppResult<Enrollment>;
}

pub struct EnrollmentManager {
    enrollments: Arc<dyn EnrollmentRepository>,
    students: Arc<dyn StudentRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl EnrollmentManager {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        students: Arc<dyn StudentRepository>,
        plans: Arc<dyn PlanRepository>,
    ) -> Self {
        Self {
            enrollments,
            students,
            plans,
        }
    }

    /// Check references and start date, then price the enrollment.
    async fn prepare(&self, request: EnrollmentRequest) -> AppResult<NewEnrollment> {
        self.students
            .find_by_id(request.student_id)
            .await?
            .ok_or_not_found("Student")?;

        let plan = self
            .plans
            .find_by_id(request.plan_id)
            .await?
            .ok_or_not_found("Plan")?;

        if request.start_date < Utc::now() {
            tracing::debug!(start_date = %request.start_date, "Rejected past start date");
            return Err(AppError::bad_request(PAST_DATE_NOT_PERMITTED));
        }

        let terms = compute(&plan, request.start_date)
            .ok_or_else(|| AppError::bad_request("Plan duration is invalid"))?;

        Ok(NewEnrollment {
            student_id: request.student_id,
            plan_id: request.plan_id,
            start_date: request.start_date,
            end_date: terms.end_date,
            price: terms.price,
        })
    }
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn list(&self) -> AppResult<Vec<EnrollmentDetails>> {
        self.enrollments.list_with_details().await
    }

    async fn get(&self, id: i32) -> AppResult<Enrollment> {
        self.enrollments
            .find_by_id(id)
            .await?
            .ok_or_not_found("Enrollment")
    }

    async fn create(&self, request: EnrollmentRequest) -> AppResult<Enrollment> {
        let enrollment = self.prepare(request).await?;

        let created = self.enrollments.create(enrollment).await?;
        tracing::info!(
            enrollment_id = created.id,
            price = created.price,
            "Enrollment created"
        );
        Ok(created)
    }

    async fn update(&self, id: i32, request: EnrollmentRequest) -> AppResult<Enrollment> {
        self.get(id).await?;
        let enrollment = self.prepare(request).await?;

        let updated = self.enrollments.update(id, enrollment).await?;
        tracing::info!(enrollment_id = id, "Enrollment updated");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<Enrollment> {
        let enrollment = self.get(id).await?;

        self.enrollments.delete(id).await?;
        tracing::info!(enrollment_id = id, "Enrollment deleted");
        Ok(enrollment)
    }
}
