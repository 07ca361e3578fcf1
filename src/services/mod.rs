//! Application services layer - use cases and business rules.
//!
//! Services depend on repository traits, never on SeaORM directly.

mod auth_service;
pub mod container;
mod enrollment_service;
mod plan_service;
mod student_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator, Claims, SessionResponse};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use plan_service::{PlanManager, PlanService};
pub use student_service::{StudentListing, StudentManager, StudentService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
