//! Repository layer - Data access abstraction
//!
//! One repository trait per entity, each with a SeaORM implementation.
//! Services depend on the traits only.

pub(crate) mod entities;
mod enrollment_repository;
mod plan_repository;
mod student_repository;
mod user_repository;

pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use plan_repository::{PlanRepository, PlanStore};
pub use student_repository::{StudentRepository, StudentStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use plan_repository::MockPlanRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
