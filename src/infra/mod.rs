//! Infrastructure layer - PostgreSQL through SeaORM
//!
//! - Database connection and migrations
//! - Repository implementations for every entity

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    EnrollmentRepository, EnrollmentStore, PlanRepository, PlanStore, StudentRepository,
    StudentStore, UserRepository, UserStore,
};
