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
                    .table(Technologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Technologies::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Technologies::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Technologies::Category)
                            .string_len(20)
                            .not_null()
                            .default("Other"),
                    )
                    .col(
                        ColumnDef::new(Technologies::Proficiency)
                            .small_integer()
                            .not_null()
                            .default(50)
                            .check(Expr::col(Technologies::Proficiency).between(0, 100)),
                    )
                    .col(ColumnDef::new(Technologies::Logo).text())
                    .col(ColumnDef::new(Technologies::WorkAs).string_len(100))
                    .col(
                        ColumnDef::new(Technologies::Color)
                            .string_len(20)
                            .not_null()
                            .default("#3B82F6"),
                    )
                    .col(
                        ColumnDef::new(Technologies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Technologies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Technologies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_technologies_active
                ON technologies (created_at DESC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        create_updated_at_trigger(manager, "technologies").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "technologies").await?;

        manager
            .drop_table(Table::drop().table(Technologies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Technologies {
    Table,
    Id,
    Name,
    Category,
    Proficiency,
    Logo,
    WorkAs,
    Color,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
