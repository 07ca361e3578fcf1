//! Student domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Schema};

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ana Souza")]
    pub name: String,
    #[schema(example = "ana@gympoint.com")]
    pub email: String,
    #[schema(example = "27")]
    pub age: String,
    #[schema(example = "61.5")]
    pub weight: String,
    #[schema(example = "1.68")]
    pub height: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student creation payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewStudent {
    #[schema(example = "Ana Souza")]
    pub name: String,
    #[schema(example = "ana@gympoint.com")]
    pub email: String,
    #[schema(example = "27")]
    pub age: String,
    #[schema(example = "61.5")]
    pub weight: String,
    #[schema(example = "1.68")]
    pub height: String,
}

impl Schema for NewStudent {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("age", FieldKind::Text),
        FieldSpec::required("weight", FieldKind::Text),
        FieldSpec::required("height", FieldKind::Text),
    ];
}

/// Partial student update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StudentChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub weight: Option<String>,
    pub height: Option<String>,
}

impl Schema for StudentChanges {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("email", FieldKind::Email),
        FieldSpec::optional("age", FieldKind::Text),
        FieldSpec::optional("weight", FieldKind::Text),
        FieldSpec::optional("height", FieldKind::Text),
    ];
}

impl StudentChanges {
    /// Apply the changes to an in-memory student.
    pub fn apply_to(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(weight) = self.weight {
            student.weight = weight;
        }
        if let Some(height) = self.height {
            student.height = height;
        }
        student.updated_at = Utc::now();
    }
}

/// Student fields returned after create and update (e-mail omitted)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub age: String,
    pub weight: String,
    pub height: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            age: student.age,
            weight: student.weight,
            height: student.height,
        }
    }
}
