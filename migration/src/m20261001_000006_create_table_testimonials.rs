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
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonials::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Testimonials::City).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Testimonials::Rating)
                            .small_integer()
                            .not_null()
                            .default(5)
                            .check(Expr::col(Testimonials::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Testimonials::Comment).text().not_null())
                    .col(ColumnDef::new(Testimonials::Avatar).text())
                    .col(ColumnDef::new(Testimonials::Date).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Testimonials::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "testimonials").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "testimonials").await?;

        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    City,
    Rating,
    Comment,
    Avatar,
    Date,
    CreatedAt,
    UpdatedAt,
}
