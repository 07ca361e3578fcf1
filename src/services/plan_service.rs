//! Plan service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewPlan, Plan, PlanChanges};
use crate::errors::{AppResult, OptionExt};
use crate::infra::PlanRepository;

#[async_trait]
pub trait PlanService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Plan>>;

    async fn get(&self, id: i32) -> AppResult<Plan>;

    async fn create(&self, plan: NewPlan) -> AppResult<Plan>;

    async fn update(&self, id: i32, changes: PlanChanges) -> AppResult<Plan>;

    /// Delete a plan, returning the record as it was.
    async fn delete(&self, id: i32) -> AppResult<Plan>;
}

pub struct PlanManager {
    plans: Arc<dyn PlanRepository>,
}

impl PlanManager {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }
}

#[async_trait]
impl PlanService for PlanManager {
    async fn list(&self) -> AppResult<Vec<Plan>> {
        self.plans.list().await
    }

    async fn get(&self, id: i32) -> AppResult<Plan> {
        self.plans.find_by_id(id).await?.ok_or_not_found("Plan")
    }

    async fn create(&self, plan: NewPlan) -> AppResult<Plan> {
        let created = self.plans.create(plan).await?;
        tracing::info!(plan_id = created.id, "Plan created");
        Ok(created)
    }

    async fn update(&self, id: i32, changes: PlanChanges) -> AppResult<Plan> {
        self.get(id).await?;

        let updated = self.plans.update(id, changes).await?;
        tracing::info!(plan_id = id, "Plan updated");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> AppResult<Plan> {
        let plan = self.get(id).await?;

        self.plans.delete(id).await?;
        tracing::info!(plan_id = id, "Plan deleted");
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::MockPlanRepository;

    #[tokio::test]
    async fn update_missing_plan_never_writes() {
        let mut repo = MockPlanRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = PlanManager::new(Arc::new(repo));
        let err = service.update(3, PlanChanges::default()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound("Plan")));
    }

    #[tokio::test]
    async fn delete_missing_plan_is_not_found() {
        let mut repo = MockPlanRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let service = PlanManager::new(Arc::new(repo));
        assert!(service.delete(3).await.is_err());
    }
}
