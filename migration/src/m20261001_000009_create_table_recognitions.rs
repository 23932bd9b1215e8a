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
                    .table(Recognitions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recognitions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Recognitions::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Recognitions::Description).text().not_null())
                    .col(ColumnDef::new(Recognitions::Icon).string_len(100).not_null())
                    .col(ColumnDef::new(Recognitions::Color).string_len(50).not_null())
                    .col(ColumnDef::new(Recognitions::Date).string_len(50).not_null())
                    .col(ColumnDef::new(Recognitions::Issuer).string_len(200))
                    .col(ColumnDef::new(Recognitions::CredentialUrl).text())
                    .col(
                        ColumnDef::new(Recognitions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Recognitions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "recognitions").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "recognitions").await?;

        manager
            .drop_table(Table::drop().table(Recognitions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Recognitions {
    Table,
    Id,
    Title,
    Description,
    Icon,
    Color,
    Date,
    Issuer,
    CredentialUrl,
    CreatedAt,
    UpdatedAt,
}
