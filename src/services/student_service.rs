//! Student service - listing, lookup and maintenance of students.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::config::STUDENT_PAGE_SIZE;
use crate::domain::{NewStudent, Student, StudentChanges, StudentResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::StudentRepository;
use crate::types::{Page, PageRequest};

/// Result of listing students: everything, or one page.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StudentListing {
    Page(Page<Student>),
    All(Vec<Student>),
}

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Without a page, every student in store order. With a page, five
    /// students ordered by name, filtered by `search` when given.
    async fn list(&self, page: Option<u64>, search: Option<String>) -> AppResult<StudentListing>;

    async fn get(&self, id: i32) -> AppResult<Student>;

    /// Register a student. The e-mail must not be in use.
    async fn create(&self, student: NewStudent) -> AppResult<StudentResponse>;

    /// Update a student. A changed e-mail must not be in use.
    async fn update(&self, id: i32, changes: StudentChanges) -> AppResult<StudentResponse>;

    /// Delete a student, returning the record as it was.
    async fn delete(&self, id: i32) -> AppResult<Student>;
}

/// Concrete implementation of StudentService.
pub struct StudentManager {
    students: Arc<dyn StudentRepository>,
}

impl StudentManager {
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }

    async fn ensure_email_free(&self, email: &str) -> AppResult<()> {
        // Best effort: the unique index on students.email has the final say
        if self.students.find_by_email(email).await?.is_some() {
            tracing::debug!("Rejected duplicate student e-mail");
            return Err(AppError::conflict("E-mail"));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn list(&self, page: Option<u64>, search: Option<String>) -> AppResult<StudentListing> {
        let Some(page) = page else {
            return Ok(StudentListing::All(self.students.list().await?));
        };

        let request = PageRequest::new(page, STUDENT_PAGE_SIZE);
        let total = self.students.count(search.clone()).await?;
        let content = self.students.search(search, request).await?;

        Ok(StudentListing::Page(Page::new(content, request, total)))
    }

    async fn get(&self, id: i32) -> AppResult<Student> {
        self.students.find_by_id(id).await?.ok_or_not_found("Student")
    }

    async fn create(&self, student: NewStudent) -> AppResult<StudentResponse> {
        self.ensure_email_free(&student.email).await?;

        let created = self.students.create(student).await?;
        tracing::info!(student_id = created.id, "Student created");

        Ok(StudentResponse::from(created))
    }

    async fn update(&self, id: i32, changes: StudentChanges) -> AppResult<StudentResponse> {
        let current = self.get(id).await?;

        if let Some(email) = changes.email.as_deref() {
            if email != current.email {
                self.ensure_email_free(email).await?;
            }
        }

        let updated = self.students.update(id, changes).await?;
        tracing::info!(student_id = id, "Student updated");

        Ok(StudentResponse::from(updated))
    }

    async fn delete(&self, id: i32) -> AppResult<Student> {
        let student = self.get(id).await?;

        self.students.delete(id).await?;
        tracing::info!(student_id = id, "Student deleted");

        Ok(student)
    }
}
