//! Validated JSON extractor - checks the body against the payload's field
//! specification before deserializing it.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::config::VALIDATION_FAILED;
use crate::errors::AppError;
use crate::validation::{self, Schema};

/// JSON body that passed its [`Schema`].
///
/// # Example
///
/// ```rust,ignore
/// async fn create_plan(ValidatedJson(plan): ValidatedJson<NewPlan>) {
///     // plan.duration is a positive integer here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!("Unreadable JSON body: {}", e.body_text());
                AppError::validation(VALIDATION_FAILED)
            })?;

        Ok(ValidatedJson(validation::parse(value)?))
    }
}
