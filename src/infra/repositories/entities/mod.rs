//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod enrollment;
pub mod plan;
pub mod student;
pub mod user;
