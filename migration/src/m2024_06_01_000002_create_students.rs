//! Migration to create the students table.
//!
//! Students carry a nullable `mentor_id` reference to `mentors.id`. The
//! reference is cleared rather than cascaded if a mentor row ever disappears.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::ExternalId).text().null())
                    .col(ColumnDef::new(Students::Name).text().null())
                    .col(ColumnDef::new(Students::Email).text().null())
                    .col(ColumnDef::new(Students::Batch).text().null())
                    .col(ColumnDef::new(Students::MentorId).uuid().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_mentor_id")
                            .from(Students::Table, Students::MentorId)
                            .to(Mentors::Table, Mentors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the "students of a mentor" lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_students_mentor_id")
                    .table(Students::Table)
                    .col(Students::MentorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_mentor_id")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    ExternalId,
    Name,
    Email,
    Batch,
    MentorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Mentors {
    Table,
    Id,
}
