//! Migrator for the vocabulary schema.
//! Indexes are applied after the table they cover.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_words;
mod m20250101_000002_add_words_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_words::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000002_add_words_indexes::Migration),
        ]
    }
}
