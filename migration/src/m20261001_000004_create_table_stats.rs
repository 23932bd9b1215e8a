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
                    .table(Stats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stats::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Stats::ProjectsCompleted)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stats::ProjectsCompleted).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stats::HappyClients)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stats::HappyClients).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stats::YearsExperience)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stats::YearsExperience).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stats::TechnologiesMastered)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(Stats::TechnologiesMastered).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Stats::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Stats::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "stats").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "stats").await?;

        manager
            .drop_table(Table::drop().table(Stats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stats {
    Table,
    Id,
    ProjectsCompleted,
    HappyClients,
    YearsExperience,
    TechnologiesMastered,
    CreatedAt,
    UpdatedAt,
}
