//! HTTP request handlers.

pub mod enrollment_handler;
pub mod plan_handler;
pub mod session_handler;
pub mod student_handler;

pub use enrollment_handler::enrollment_routes;
pub use plan_handler::plan_routes;
pub use session_handler::session_routes;
pub use student_handler::student_routes;
