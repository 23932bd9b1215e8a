use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::about::application::{
    domain::entities::{About, AboutContent},
    ports::outgoing::{AboutRepository, AboutRepositoryError},
};
use crate::shared::persistence::from_string_list;

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(content: AboutContent) -> ActiveModel {
    ActiveModel {
        bio: Set(content.bio),
        mission: Set(content.mission),
        goals: Set(from_string_list(content.goals)),
        currently_learning: Set(from_string_list(content.currently_learning)),
        skills: Set(from_string_list(content.skills)),
        experience: Set(content.experience),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn new_row(content: AboutContent) -> ActiveModel {
    let mut model = active_model(content);
    model.id = Set(Uuid::new_v4());
    model.created_at = Set(Utc::now().fixed_offset());
    model
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn find(&self) -> Result<Option<About>, AboutRepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn insert(&self, content: AboutContent) -> Result<About, AboutRepositoryError> {
        let inserted = new_row(content)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn upsert(&self, content: AboutContent) -> Result<About, AboutRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            Some(row) => {
                let updated = Entity::update_many()
                    .set(active_model(content))
                    .filter(Column::Id.eq(row.id))
                    .exec_with_returning(&txn)
                    .await
                    .map_err(map_db_err)?;
                updated.into_iter().next().unwrap_or(row)
            }
            None => new_row(content).insert(&txn).await.map_err(map_db_err)?,
        };

        txn.commit().await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn row(bio: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            bio: bio.into(),
            mission: "Ship it".into(),
            goals: json!(["Learn Rust"]),
            currently_learning: json!(["sea-orm"]),
            skills: json!([]),
            experience: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_decodes_json_lists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row("Stored bio")]])
            .into_connection();
        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let about = repo.find().await.unwrap().unwrap();

        assert_eq!(about.content.goals, vec!["Learn Rust"]);
        assert_eq!(about.content.currently_learning, vec!["sea-orm"]);
        assert!(about.content.skills.is_empty());
    }

    #[tokio::test]
    async fn upsert_inserts_into_empty_table() {
        let inserted = row("Fresh");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new(), vec![inserted.clone()]])
            .into_connection();
        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let about = repo.upsert(AboutContent::default()).await.unwrap();

        assert_eq!(about.id, inserted.id);
        assert_eq!(about.content.bio, "Fresh");
    }

    #[tokio::test]
    async fn upsert_updates_existing_row() {
        let existing = row("Old");
        let mut updated = existing.clone();
        updated.bio = "New".into();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![updated]])
            .into_connection();
        let repo = AboutRepositoryPostgres::new(Arc::new(db));

        let about = repo.upsert(AboutContent::default()).await.unwrap();

        assert_eq!(about.id, existing.id);
        assert_eq!(about.content.bio, "New");
    }
}
