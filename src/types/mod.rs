//! Shared types.

mod pagination;

pub use pagination::{Page, PageRequest, StudentPage};
