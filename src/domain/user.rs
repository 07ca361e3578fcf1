//! User domain entity and related types.
//!
//! Users are the staff accounts that sign in to the API. Only users with the
//! admin flag get past the admin gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::{FieldKind, FieldSpec, Schema};

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user is flagged as administrator
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// User provisioning data (CLI only)
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password is too short"))]
    pub password: String,
    pub admin: bool,
}

/// Session creation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SessionRequest {
    #[schema(example = "admin@gympoint.com")]
    pub email: String,
    #[schema(example = "123456")]
    pub password: String,
}

impl Schema for SessionRequest {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("password", FieldKind::Text),
    ];
}

/// Public user fields returned with a session
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUser {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Gympoint Admin")]
    pub name: String,
    #[schema(example = "admin@gympoint.com")]
    pub email: String,
}

impl From<User> for SessionUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            name: "Admin".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            admin: true,
        }
    }

    #[test]
    fn valid_new_user_passes() {
        assert!(new_user("admin@gympoint.com", "123456").validate().is_ok());
    }

    #[test]
    fn bad_email_or_short_password_fails() {
        assert!(new_user("admin", "123456").validate().is_err());
        assert!(new_user("admin@gympoint.com", "123").validate().is_err());
    }
}
