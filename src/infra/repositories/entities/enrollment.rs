//! Enrollment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Enrollment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Cleared when the student is removed
    pub student_id: Option<i32>,
    /// Cleared when the plan is removed
    pub plan_id: Option<i32>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_delete = "SetNull"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id",
        on_delete = "SetNull"
    )]
    Plan,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment {
            id: model.id,
            student_id: model.student_id,
            plan_id: model.plan_id,
            start_date: model.start_date,
            end_date: model.end_date,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
