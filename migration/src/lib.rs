//! Database migrations for the mentorship service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2024_06_01_000001_create_mentors;
mod m2024_06_01_000002_create_students;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2024_06_01_000001_create_mentors::Migration),
            Box::new(m2024_06_01_000002_create_students::Migration),
        ]
    }
}
