//! Domain layer - Core business entities and logic
//!
//! Students, plans and enrollments, the enrollment pricing rules, and the
//! staff users that administer them. Nothing here touches the database.

pub mod enrollment;
pub mod password;
pub mod plan;
pub mod pricing;
pub mod student;
pub mod user;

pub use enrollment::{
    Enrollment, EnrollmentDetails, EnrollmentRequest, NewEnrollment, PlanTitle, StudentName,
};
pub use password::Password;
pub use plan::{NewPlan, Plan, PlanChanges};
pub use pricing::{compute, EnrollmentTerms};
pub use student::{NewStudent, Student, StudentChanges, StudentResponse};
pub use user::{NewUser, SessionRequest, SessionUser, User};
