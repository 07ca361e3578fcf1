//! Enrollment repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::enrollment::{self, ActiveModel, Entity as EnrollmentEntity};
use super::entities::{plan, student};
use crate::domain::{Enrollment, EnrollmentDetails, NewEnrollment, PlanTitle, StudentName};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>>;

    /// All enrollments ordered by end date, joined with the student's name
    /// and the plan's title
    async fn list_with_details(&self) -> AppResult<Vec<EnrollmentDetails>>;

    async fn create(&self, enrollment: NewEnrollment) -> AppResult<Enrollment>;

    /// Overwrite every computed field of an existing enrollment
    async fn update(&self, id: i32, enrollment: NewEnrollment) -> AppResult<Enrollment>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed enrollment repository
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn student_names(&self, ids: Vec<i32>) -> AppResult<HashMap<i32, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = student::Entity::find()
            .filter(student::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, m.name)).collect())
    }

    async fn plan_titles(&self, ids: Vec<i32>) -> AppResult<HashMap<i32, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = plan::Entity::find()
            .filter(plan::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(|m| (m.id, m.title)).collect())
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>> {
        let result = EnrollmentEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Enrollment::from))
    }

    async fn list_with_details(&self) -> AppResult<Vec<EnrollmentDetails>> {
        let models = EnrollmentEntity::find()
            .order_by_asc(enrollment::Column::EndDate)
            .all(&self.db)
            .await?;

        let mut student_ids: Vec<i32> = models.iter().filter_map(|m| m.student_id).collect();
        student_ids.sort_unstable();
        student_ids.dedup();
        let mut plan_ids: Vec<i32> = models.iter().filter_map(|m| m.plan_id).collect();
        plan_ids.sort_unstable();
        plan_ids.dedup();

        let names = self.student_names(student_ids).await?;
        let titles = self.plan_titles(plan_ids).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let student = model
                    .student_id
                    .and_then(|id| names.get(&id))
                    .map(|name| StudentName { name: name.clone() });
                let plan = model
                    .plan_id
                    .and_then(|id| titles.get(&id))
                    .map(|title| PlanTitle {
                        title: title.clone(),
                    });
                EnrollmentDetails::new(Enrollment::from(model), student, plan)
            })
            .collect())
    }

    async fn create(&self, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let now = Utc::now();
        let active_model = ActiveModel {
            student_id: Set(Some(enrollment.student_id)),
            plan_id: Set(Some(enrollment.plan_id)),
            start_date: Set(enrollment.start_date),
            end_date: Set(enrollment.end_date),
            price: Set(enrollment.price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Enrollment::from(model))
    }

    async fn update(&self, id: i32, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let model = EnrollmentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Enrollment"))?;

        let mut active: ActiveModel = model.into();
        active.student_id = Set(Some(enrollment.student_id));
        active.plan_id = Set(Some(enrollment.plan_id));
        active.start_date = Set(enrollment.start_date);
        active.end_date = Set(enrollment.end_date);
        active.price = Set(enrollment.price);
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Enrollment::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EnrollmentEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Enrollment"));
        }

        Ok(())
    }
}
