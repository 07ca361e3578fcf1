//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20191110_000001_create_users_table;
mod m20191118_000001_add_admin_to_users;
mod m20191119_000001_create_students_table;
mod m20191120_000001_create_plans_table;
mod m20191121_000001_create_enrollments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20191110_000001_create_users_table::Migration),
            Box::new(m20191118_000001_add_admin_to_users::Migration),
            Box::new(m20191119_000001_create_students_table::Migration),
            Box::new(m20191120_000001_create_plans_table::Migration),
            Box::new(m20191121_000001_create_enrollments_table::Migration),
        ]
    }
}
