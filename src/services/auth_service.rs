//! Authentication service - sessions, token verification and the admin check.
//!
//! Password hashing lives in the domain `Password` value object.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use crate::config::Config;
use crate::domain::{NewUser, Password, SessionRequest, SessionUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub exp: i64,
    pub iat: i64,
}

/// Returned after a successful sign in
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user: SessionUser,
    /// JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and issue a token.
    async fn create_session(&self, request: SessionRequest) -> AppResult<SessionResponse>;

    /// Verify a token and extract its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Load the user and require the admin flag.
    async fn ensure_admin(&self, user_id: i32) -> AppResult<User>;

    /// Provision a staff account.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;
}

/// Sign a token for a user id.
fn generate_token(user_id: i32, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user_id,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?)
}

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }

    /// Issue a token without going through a session. Used by tooling and tests.
    pub fn issue_token(&self, user_id: i32) -> AppResult<String> {
        generate_token(user_id, &self.config)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn create_session(&self, request: SessionRequest) -> AppResult<SessionResponse> {
        let found = self.users.find_by_email(&request.email).await?;

        // Unknown e-mails still pay for a verification
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";
        let password_hash = found
            .as_ref()
            .map_or(dummy_hash, |user| user.password_hash.as_str());
        let password_valid = Password::from_hash(password_hash.to_string()).verify(&request.password);

        let user = match found {
            Some(user) if password_valid => user,
            _ => {
                tracing::debug!("Rejected session attempt");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = generate_token(user.id, &self.config)?;
        tracing::info!(user_id = user.id, "Session created");

        Ok(SessionResponse {
            user: SessionUser::from(user),
            token,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn ensure_admin(&self, user_id: i32) -> AppResult<User> {
        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_admin() => Ok(user),
            _ => Err(AppError::AdminRequired),
        }
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        if self.users.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::conflict("E-mail"));
        }

        let password_hash = Password::new(&user.password)?.into_string();
        let created = self
            .users
            .create(user.name, user.email, password_hash, user.admin)
            .await?;
        tracing::info!(user_id = created.id, admin = created.admin, "User created");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockUserRepository;

    const SECRET: &str = "test-secret-key-that-is-long-enough";

    fn config() -> Config {
        Config::new("postgres://localhost/gympoint_test", SECRET)
    }

    fn user(id: i32, admin: bool, password: &str) -> User {
        User {
            id,
            name: "Staff".to_string(),
            email: "staff@gympoint.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn session(email: &str, password: &str) -> SessionRequest {
        SessionRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn session_token_round_trips() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(user(4, true, "123456"))));

        let auth = Authenticator::new(Arc::new(repo), config());
        let response = auth
            .create_session(session("staff@gympoint.com", "123456"))
            .await
            .unwrap();

        assert_eq!(response.user.id, 4);
        assert_eq!(auth.verify_token(&response.token).unwrap().sub, 4);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_the_same() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok((email == "staff@gympoint.com").then(|| user(4, true, "123456"))));

        let auth = Authenticator::new(Arc::new(repo), config());

        let wrong = auth.create_session(session("staff@gympoint.com", "654321")).await;
        let unknown = auth.create_session(session("nobody@gympoint.com", "123456")).await;

        assert!(matches!(wrong, Err(AppError::InvalidCredentials)));
        assert!(matches!(unknown, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn non_admin_is_refused() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(user(id, false, "123456"))));

        let auth = Authenticator::new(Arc::new(repo), config());
        assert!(matches!(auth.ensure_admin(2).await, Err(AppError::AdminRequired)));
    }

    #[tokio::test]
    async fn missing_user_is_refused_by_admin_check() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let auth = Authenticator::new(Arc::new(repo), config());
        assert!(matches!(auth.ensure_admin(2).await, Err(AppError::AdminRequired)));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let other = Authenticator::new(
            Arc::new(MockUserRepository::new()),
            Config::new("postgres://localhost/other", "another-secret-that-is-long-enough"),
        );
        let token = other.issue_token(1).unwrap();

        let auth = Authenticator::new(Arc::new(MockUserRepository::new()), config());
        assert!(matches!(auth.verify_token(&token), Err(AppError::Jwt(_))));
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let auth = Authenticator::new(Arc::new(repo), config());
        let result = auth
            .create_user(NewUser {
                name: "Admin".to_string(),
                email: "admin@gympoint.com".to_string(),
                password: "123".to_string(),
                admin: true,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
