//! Versioned schema migrations for the AniPulse content database.

pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_content_tables;
mod m20260220_000001_add_comment_rating;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_content_tables::Migration),
            Box::new(m20260220_000001_add_comment_rating::Migration),
        ]
    }
}
