//! Plan domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Schema};

/// Subscription plan: a duration in months sold at a monthly price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Plan {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Gold")]
    pub title: String,
    /// Duration in months
    #[schema(example = 3)]
    pub duration: i32,
    /// Monthly price
    #[schema(example = 109.0)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Plan creation payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPlan {
    #[schema(example = "Gold")]
    pub title: String,
    #[schema(example = 3)]
    pub duration: i32,
    #[schema(example = 109.0)]
    pub price: f64,
}

impl Schema for NewPlan {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", FieldKind::Text),
        FieldSpec::required("duration", FieldKind::Integer).positive(),
        FieldSpec::required("price", FieldKind::Number).positive(),
    ];
}

/// Partial plan update.
///
/// Values are taken as given; only their JSON types are checked.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PlanChanges {
    pub title: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
}

impl Schema for PlanChanges {
    const FIELDS: &'static [FieldSpec] = &[];
}

impl PlanChanges {
    pub fn apply_to(self, plan: &mut Plan) {
        if let Some(title) = self.title {
            plan.title = title;
        }
        if let Some(duration) = self.duration {
            plan.duration = duration;
        }
        if let Some(price) = self.price {
            plan.price = price;
        }
        plan.updated_at = Utc::now();
    }
}
