//! Pagination types for list endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::DEFAULT_PAGE_NUMBER;
use crate::domain::Student;

/// A 1-indexed page request with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Page 0 is treated as the first page.
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page: page.max(DEFAULT_PAGE_NUMBER),
            per_page,
        }
    }

    /// Calculate offset for database query, capped at what Postgres accepts.
    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }

    /// Whether this page reaches the end of `total` matching items.
    pub fn is_last(&self, total: u64) -> bool {
        self.page.saturating_mul(self.per_page) >= total
    }
}

/// One page of results plus an end-of-listing flag
#[derive(Debug, Serialize, ToSchema)]
#[aliases(StudentPage = Page<Student>)]
pub struct Page<T> {
    #[serde(rename = "lastPage")]
    pub last_page: bool,
    pub content: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            last_page: request.is_last(total),
            content,
        }
    }
}
