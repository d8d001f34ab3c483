//! Create `words` table.
//! One row per vocabulary entry; `id` is generated by the application, never by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Words::Table)
                    .if_not_exists()
                    .col(string_len(Words::Id, 32).primary_key())
                    .col(text(Words::Term).not_null())
                    .col(text(Words::Translation).not_null())
                    .col(timestamp_with_time_zone(Words::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Words::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Words {
    Table,
    Id,
    Term,
    Translation,
    CreatedAt,
}
