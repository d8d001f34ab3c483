use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_words::Words;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing is always newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_words_created_at")
                    .table(Words::Table)
                    .col((Words::CreatedAt, IndexOrder::Desc))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_words_created_at").table(Words::Table).to_owned())
            .await
    }
}
