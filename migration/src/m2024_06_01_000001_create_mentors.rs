//! Migration to create the mentors table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Mentors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Mentors::ExternalId).text().null())
                    .col(ColumnDef::new(Mentors::Name).text().null())
                    .col(ColumnDef::new(Mentors::Email).text().null())
                    .col(
                        ColumnDef::new(Mentors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Mentors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Mentors {
    Table,
    Id,
    ExternalId,
    Name,
    Email,
    CreatedAt,
    UpdatedAt,
}
