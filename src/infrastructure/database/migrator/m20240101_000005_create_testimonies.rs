//! Migration to create testimonies table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Testimonies::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Testimonies::Content).text().not_null())
                    .col(
                        ColumnDef::new(Testimonies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Testimonies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Testimonies {
    Table,
    Id,
    Name,
    Content,
    CreatedAt,
    UpdatedAt,
}
