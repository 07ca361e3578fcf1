//! Application state - the services and database shared by every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, EnrollmentService, PlanService, ServiceContainer, Services, StudentService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub student_service: Arc<dyn StudentService>,
    pub plan_service: Arc<dyn PlanService>,
    pub enrollment_service: Arc<dyn EnrollmentService>,
    /// Kept for the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Build state over SeaORM stores on the given database.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::new(&services, database)
    }

    /// Build state from an already wired container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: services.auth(),
            student_service: services.students(),
            plan_service: services.plans(),
            enrollment_service: services.enrollments(),
            database,
        }
    }
}
