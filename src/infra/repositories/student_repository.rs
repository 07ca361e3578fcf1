//! Student repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::student::{self, ActiveModel, Entity as StudentEntity};
use crate::domain::{NewStudent, Student, StudentChanges};
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>>;

    /// Exact, case-sensitive e-mail lookup
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    /// All students, in store order
    async fn list(&self) -> AppResult<Vec<Student>>;

    /// One page of students ordered by name, optionally filtered by a
    /// case-insensitive substring of the name
    async fn search(&self, name: Option<String>, page: PageRequest) -> AppResult<Vec<Student>>;

    /// Number of students matching the same name filter as `search`
    async fn count(&self, name: Option<String>) -> AppResult<u64>;

    /// Insert a student; a duplicate e-mail yields `Conflict`
    async fn create(&self, student: NewStudent) -> AppResult<Student>;

    /// Apply a partial update; a duplicate e-mail yields `Conflict`
    async fn update(&self, id: i32, changes: StudentChanges) -> AppResult<Student>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed student repository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn name_filter(name: Option<String>) -> Condition {
    match name.filter(|term| !term.is_empty()) {
        Some(term) => Condition::all().add(
            Expr::expr(Func::lower(Expr::col(student::Column::Name)))
                .like(format!("%{}%", term.to_lowercase())),
        ),
        None => Condition::all(),
    }
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let result = StudentEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Student::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let result = StudentEntity::find()
            .filter(student::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Student::from))
    }

    async fn list(&self) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Student::from).collect())
    }

    async fn search(&self, name: Option<String>, page: PageRequest) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .filter(name_filter(name))
            .order_by_asc(student::Column::Name)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Student::from).collect())
    }

    async fn count(&self, name: Option<String>) -> AppResult<u64> {
        StudentEntity::find()
            .filter(name_filter(name))
            .count(&self.db)
            .await
            .map_err(Into::into)
    }

    async fn create(&self, student: NewStudent) -> AppResult<Student> {
        let now = Utc::now();
        let active_model = ActiveModel {
            name: Set(student.name),
            email: Set(student.email),
            age: Set(student.age),
            weight: Set(student.weight),
            height: Set(student.height),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_unique(e, "E-mail"))?;
        Ok(Student::from(model))
    }

    async fn update(&self, id: i32, changes: StudentChanges) -> AppResult<Student> {
        let model = StudentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Student"))?;

        let mut student = Student::from(model.clone());
        changes.apply_to(&mut student);

        let mut active: ActiveModel = model.into();
        active.stage(student);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_unique(e, "E-mail"))?;
        Ok(Student::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = StudentEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Student"));
        }

        Ok(())
    }
}
