//! Service Container - centralized service access.
//!
//! Handlers and middleware reach services through this container; the
//! concrete managers are wired once at startup.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, EnrollmentManager, EnrollmentService, PlanManager, PlanService,
    StudentManager, StudentService,
};
use crate::config::Config;
use crate::infra::{
    EnrollmentRepository, EnrollmentStore, PlanRepository, PlanStore, StudentRepository,
    StudentStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn students(&self) -> Arc<dyn StudentService>;

    fn plans(&self) -> Arc<dyn PlanService>;

    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    student_service: Arc<dyn StudentService>,
    plan_service: Arc<dyn PlanService>,
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        student_service: Arc<dyn StudentService>,
        plan_service: Arc<dyn PlanService>,
        enrollment_service: Arc<dyn EnrollmentService>,
    ) -> Self {
        Self {
            auth_service,
            student_service,
            plan_service,
            enrollment_service,
        }
    }

    /// Wire every service over the given repositories.
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        students: Arc<dyn StudentRepository>,
        plans: Arc<dyn PlanRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
        config: Config,
    ) -> Self {
        Self::new(
            Arc::new(Authenticator::new(users, config)),
            Arc::new(StudentManager::new(students.clone())),
            Arc::new(PlanManager::new(plans.clone())),
            Arc::new(EnrollmentManager::new(enrollments, students, plans)),
        )
    }

    /// Wire every service over SeaORM stores sharing one connection.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        Self::from_repositories(
            Arc::new(UserStore::new(db.clone())),
            Arc::new(StudentStore::new(db.clone())),
            Arc::new(PlanStore::new(db.clone())),
            Arc::new(EnrollmentStore::new(db)),
            config,
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }

    fn plans(&self) -> Arc<dyn PlanService> {
        self.plan_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}
