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
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::Mission).text().not_null())
                    .col(ColumnDef::new(About::Goals).json_binary().not_null())
                    .col(
                        ColumnDef::new(About::CurrentlyLearning)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(About::Skills).json_binary().not_null())
                    .col(ColumnDef::new(About::Experience).text())
                    .col(
                        ColumnDef::new(About::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(About::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        create_updated_at_trigger(manager, "about").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "about").await?;

        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Bio,
    Mission,
    Goals,
    CurrentlyLearning,
    Skills,
    Experience,
    CreatedAt,
    UpdatedAt,
}
