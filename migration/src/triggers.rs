use sea_orm_migration::prelude::*;

/// Attaches the shared `update_updated_at_column()` trigger to `table`.
pub async fn create_updated_at_trigger(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            CREATE TRIGGER update_{table}_updated_at
            BEFORE UPDATE ON {table}
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#
        ))
        .await?;

    Ok(())
}

pub async fn drop_updated_at_trigger(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table}"
        ))
        .await?;

    Ok(())
}
