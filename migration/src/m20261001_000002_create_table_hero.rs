use sea_orm_migration::prelude::*;

use crate::triggers::{create_updated_at_trigger, drop_updated_at_trigger};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hero::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hero::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Hero::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Hero::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Hero::Location).string_len(100).not_null())
                    .col(ColumnDef::new(Hero::Languages).string_len(150).not_null())
                    .col(ColumnDef::new(Hero::Profession).string_len(100).not_null())
                    .col(ColumnDef::new(Hero::University).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Hero::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Hero::ProfileImage).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::ResumeUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Hero::Bio).text().not_null())
                    .col(
                        ColumnDef::new(Hero::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Hero::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "hero").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "hero").await?;

        manager
            .drop_table(Table::drop().table(Hero::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Hero {
    Table,
    Id,
    Name,
    Title,
    Location,
    Languages,
    Profession,
    University,
    IsAvailable,
    ProfileImage,
    ResumeUrl,
    Bio,
    CreatedAt,
    UpdatedAt,
}
