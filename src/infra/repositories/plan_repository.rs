//! Plan repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::plan::{ActiveModel, Entity as PlanEntity};
use crate::domain::{NewPlan, Plan, PlanChanges};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Plan repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlanRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Plan>>;

    async fn list(&self) -> AppResult<Vec<Plan>>;

    async fn create(&self, plan: NewPlan) -> AppResult<Plan>;

    async fn update(&self, id: i32, changes: PlanChanges) -> AppResult<Plan>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed plan repository
pub struct PlanStore {
    db: DatabaseConnection,
}

impl PlanStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlanRepository for PlanStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Plan>> {
        let result = PlanEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Plan::from))
    }

    async fn list(&self) -> AppResult<Vec<Plan>> {
        let models = PlanEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Plan::from).collect())
    }

    async fn create(&self, plan: NewPlan) -> AppResult<Plan> {
        let now = Utc::now();
        let active_model = ActiveModel {
            title: Set(plan.title),
            duration: Set(plan.duration),
            price: Set(plan.price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await?;
        Ok(Plan::from(model))
    }

    async fn update(&self, id: i32, changes: PlanChanges) -> AppResult<Plan> {
        let model = PlanEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Plan"))?;

        let mut plan = Plan::from(model.clone());
        changes.apply_to(&mut plan);

        let mut active: ActiveModel = model.into();
        active.stage(plan);

        let model = active.update(&self.db).await?;
        Ok(Plan::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = PlanEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Plan"));
        }

        Ok(())
    }
}
