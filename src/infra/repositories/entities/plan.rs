//! Plan database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Plan;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub duration: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Stage the columns of an updated plan that differ from the loaded row.
    pub fn stage(&mut self, plan: Plan) {
        self.title.set_if_not_equals(plan.title);
        self.duration.set_if_not_equals(plan.duration);
        self.price.set_if_not_equals(plan.price);
        self.updated_at.set_if_not_equals(plan.updated_at);
    }
}

impl From<Model> for Plan {
    fn from(model: Model) -> Self {
        Plan {
            id: model.id,
            title: model.title,
            duration: model.duration,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::PlanChanges;

    #[test]
    fn staging_marks_only_changed_columns() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let model = Model {
            id: 3,
            title: "Gold".to_string(),
            duration: 3,
            price: 109.0,
            created_at: at,
            updated_at: at,
        };
        let mut plan = Plan::from(model.clone());
        PlanChanges {
            price: Some(99.0),
            ..Default::default()
        }
        .apply_to(&mut plan);

        let mut active: ActiveModel = model.into();
        active.stage(plan);

        assert!(active.title.is_unchanged());
        assert!(active.duration.is_unchanged());
        assert!(active.price.is_set());
        assert_eq!(*active.price.as_ref(), 99.0);
        assert!(active.updated_at.is_set());
    }
}
