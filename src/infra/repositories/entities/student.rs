//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Student;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub age: String,
    pub weight: String,
    pub height: String,
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
    /// Stage the columns of an updated student that differ from the loaded row.
    pub fn stage(&mut self, student: Student) {
        self.name.set_if_not_equals(student.name);
        self.email.set_if_not_equals(student.email);
        self.age.set_if_not_equals(student.age);
        self.weight.set_if_not_equals(student.weight);
        self.height.set_if_not_equals(student.height);
        self.updated_at.set_if_not_equals(student.updated_at);
    }
}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Student {
            id: model.id,
            name: model.name,
            email: model.email,
            age: model.age,
            weight: model.weight,
            height: model.height,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
