//! In-memory repositories shared by the integration tests.
//!
//! One `Gym` holds every table behind a mutex; each repository trait is
//! implemented on a thin handle to it so services see the same data.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use gympoint::api::AppState;
use gympoint::config::Config;
use gympoint::domain::{
    Enrollment, EnrollmentDetails, NewEnrollment, NewPlan, NewStudent, Password, Plan,
    PlanChanges, PlanTitle, Student, StudentChanges, StudentName, User,
};
use gympoint::errors::{AppError, AppResult};
use gympoint::infra::{
    Database, EnrollmentRepository, PlanRepository, StudentRepository, UserRepository,
};
use gympoint::services::{Authenticator, Services};
use gympoint::types::PageRequest;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const ADMIN_PASSWORD: &str = "123456";

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    students: Vec<Student>,
    plans: Vec<Plan>,
    enrollments: Vec<Enrollment>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct Gym {
    tables: Arc<Mutex<Tables>>,
}

impl Gym {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config() -> Config {
        Config::new("postgres://localhost/gympoint_test", TEST_SECRET)
    }

    pub fn services(&self) -> Services {
        Services::from_repositories(
            Arc::new(self.clone()),
            Arc::new(StudentTable(self.clone())),
            Arc::new(PlanTable(self.clone())),
            Arc::new(EnrollmentTable(self.clone())),
            Self::config(),
        )
    }

    /// Router state over this gym. The database handle is never connected.
    pub fn app_state(&self) -> AppState {
        AppState::new(
            &self.services(),
            Arc::new(Database::from_connection(DatabaseConnection::Disconnected)),
        )
    }

    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(Arc::new(self.clone()), Self::config())
    }

    pub fn add_user(&self, email: &str, admin: bool) -> User {
        let hash = Password::new(ADMIN_PASSWORD)
            .expect("hash password")
            .into_string();
        let mut tables = self.tables.lock().unwrap();
        let user = User {
            id: tables.next_id(),
            name: "Staff".to_string(),
            email: email.to_string(),
            password_hash: hash,
            admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.users.push(user.clone());
        user
    }

    pub fn add_student(&self, name: &str, email: &str) -> Student {
        let mut tables = self.tables.lock().unwrap();
        let student = Student {
            id: tables.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            age: "30".to_string(),
            weight: "70".to_string(),
            height: "1.75".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.students.push(student.clone());
        student
    }

    pub fn add_plan(&self, title: &str, duration: i32, price: f64) -> Plan {
        let mut tables = self.tables.lock().unwrap();
        let plan = Plan {
            id: tables.next_id(),
            title: title.to_string(),
            duration,
            price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.plans.push(plan.clone());
        plan
    }

    pub fn add_enrollment(
        &self,
        student_id: i32,
        plan_id: i32,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Enrollment {
        let mut tables = self.tables.lock().unwrap();
        let enrollment = Enrollment {
            id: tables.next_id(),
            student_id: Some(student_id),
            plan_id: Some(plan_id),
            start_date,
            end_date,
            price: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.enrollments.push(enrollment.clone());
        enrollment
    }

    pub fn enrollment_count(&self) -> usize {
        self.tables.lock().unwrap().enrollments.len()
    }

    pub fn enrollment(&self, id: i32) -> Option<Enrollment> {
        self.tables
            .lock()
            .unwrap()
            .enrollments
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for Gym {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        admin: bool,
    ) -> AppResult<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("E-mail"));
        }
        let user = User {
            id: tables.next_id(),
            name,
            email,
            password_hash,
            admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

pub struct StudentTable(Gym);

fn name_matches(student: &Student, name: &Option<String>) -> bool {
    name.as_ref().map_or(true, |n| {
        student.name.to_lowercase().contains(&n.to_lowercase())
    })
}

#[async_trait]
impl StudentRepository for StudentTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let tables = self.0.tables.lock().unwrap();
        Ok(tables.students.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let tables = self.0.tables.lock().unwrap();
        Ok(tables.students.iter().find(|s| s.email == email).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Student>> {
        Ok(self.0.tables.lock().unwrap().students.clone())
    }

    async fn search(&self, name: Option<String>, page: PageRequest) -> AppResult<Vec<Student>> {
        let tables = self.0.tables.lock().unwrap();
        let mut matching: Vec<Student> = tables
            .students
            .iter()
            .filter(|s| name_matches(s, &name))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn count(&self, name: Option<String>) -> AppResult<u64> {
        let tables = self.0.tables.lock().unwrap();
        Ok(tables
            .students
            .iter()
            .filter(|s| name_matches(s, &name))
            .count() as u64)
    }

    async fn create(&self, student: NewStudent) -> AppResult<Student> {
        let mut tables = self.0.tables.lock().unwrap();
        if tables.students.iter().any(|s| s.email == student.email) {
            return Err(AppError::conflict("E-mail"));
        }
        let created = Student {
            id: tables.next_id(),
            name: student.name,
            email: student.email,
            age: student.age,
            weight: student.weight,
            height: student.height,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.students.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: StudentChanges) -> AppResult<Student> {
        let mut tables = self.0.tables.lock().unwrap();
        if let Some(email) = &changes.email {
            if tables.students.iter().any(|s| s.id != id && &s.email == email) {
                return Err(AppError::conflict("E-mail"));
            }
        }
        let student = tables
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound("Student"))?;
        changes.apply_to(student);
        Ok(student.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.0.tables.lock().unwrap();
        let before = tables.students.len();
        tables.students.retain(|s| s.id != id);
        if tables.students.len() == before {
            return Err(AppError::NotFound("Student"));
        }
        for enrollment in tables.enrollments.iter_mut() {
            if enrollment.student_id == Some(id) {
                enrollment.student_id = None;
            }
        }
        Ok(())
    }
}

pub struct PlanTable(Gym);

#[async_trait]
impl PlanRepository for PlanTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Plan>> {
        let tables = self.0.tables.lock().unwrap();
        Ok(tables.plans.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Plan>> {
        Ok(self.0.tables.lock().unwrap().plans.clone())
    }

    async fn create(&self, plan: NewPlan) -> AppResult<Plan> {
        let mut tables = self.0.tables.lock().unwrap();
        let created = Plan {
            id: tables.next_id(),
            title: plan.title,
            duration: plan.duration,
            price: plan.price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.plans.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: PlanChanges) -> AppResult<Plan> {
        let mut tables = self.0.tables.lock().unwrap();
        let plan = tables
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Plan"))?;
        changes.apply_to(plan);
        Ok(plan.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.0.tables.lock().unwrap();
        let before = tables.plans.len();
        tables.plans.retain(|p| p.id != id);
        if tables.plans.len() == before {
            return Err(AppError::NotFound("Plan"));
        }
        for enrollment in tables.enrollments.iter_mut() {
            if enrollment.plan_id == Some(id) {
                enrollment.plan_id = None;
            }
        }
        Ok(())
    }
}

pub struct EnrollmentTable(Gym);

#[async_trait]
impl EnrollmentRepository for EnrollmentTable {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>> {
        Ok(self.0.enrollment(id))
    }

    async fn list_with_details(&self) -> AppResult<Vec<EnrollmentDetails>> {
        let tables = self.0.tables.lock().unwrap();
        let mut enrollments = tables.enrollments.clone();
        enrollments.sort_by_key(|e| e.end_date);

        Ok(enrollments
            .into_iter()
            .map(|e| {
                let student = tables
                    .students
                    .iter()
                    .find(|s| Some(s.id) == e.student_id)
                    .map(|s| StudentName {
                        name: s.name.clone(),
                    });
                let plan = tables
                    .plans
                    .iter()
                    .find(|p| Some(p.id) == e.plan_id)
                    .map(|p| PlanTitle {
                        title: p.title.clone(),
                    });
                EnrollmentDetails::new(e, student, plan)
            })
            .collect())
    }

    async fn create(&self, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let mut tables = self.0.tables.lock().unwrap();
        let created = Enrollment {
            id: tables.next_id(),
            student_id: Some(enrollment.student_id),
            plan_id: Some(enrollment.plan_id),
            start_date: enrollment.start_date,
            end_date: enrollment.end_date,
            price: enrollment.price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        tables.enrollments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, enrollment: NewEnrollment) -> AppResult<Enrollment> {
        let mut tables = self.0.tables.lock().unwrap();
        let current = tables
            .enrollments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AppError::NotFound("Enrollment"))?;
        current.student_id = Some(enrollment.student_id);
        current.plan_id = Some(enrollment.plan_id);
        current.start_date = enrollment.start_date;
        current.end_date = enrollment.end_date;
        current.price = enrollment.price;
        current.updated_at = Utc::now();
        Ok(current.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut tables = self.0.tables.lock().unwrap();
        let before = tables.enrollments.len();
        tables.enrollments.retain(|e| e.id != id);
        if tables.enrollments.len() == before {
            return Err(AppError::NotFound("Enrollment"));
        }
        Ok(())
    }
}
