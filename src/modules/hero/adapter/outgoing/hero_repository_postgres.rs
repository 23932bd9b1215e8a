use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::hero::application::{
    domain::entities::{Hero, HeroContent},
    ports::outgoing::{HeroRepository, HeroRepositoryError},
};

#[derive(Clone)]
pub struct HeroRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HeroRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(content: HeroContent) -> ActiveModel {
    ActiveModel {
        name: Set(content.name),
        title: Set(content.title),
        location: Set(content.location),
        languages: Set(content.languages),
        profession: Set(content.profession),
        university: Set(content.university),
        is_available: Set(content.is_available),
        profile_image: Set(content.profile_image),
        resume_url: Set(content.resume_url),
        bio: Set(content.bio),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

async fn insert_row<C: ConnectionTrait>(
    conn: &C,
    content: HeroContent,
) -> Result<Hero, DbErr> {
    let mut model = active_model(content);
    model.id = Set(Uuid::new_v4());
    model.created_at = Set(Utc::now().fixed_offset());

    Ok(model.insert(conn).await?.to_domain())
}

#[async_trait]
impl HeroRepository for HeroRepositoryPostgres {
    async fn find(&self) -> Result<Option<Hero>, HeroRepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn insert(&self, content: HeroContent) -> Result<Hero, HeroRepositoryError> {
        insert_row(&*self.db, content).await.map_err(map_db_err)
    }

    async fn upsert(&self, content: HeroContent) -> Result<Hero, HeroRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let hero = match existing {
            Some(row) => Entity::update_many()
                .set(active_model(content))
                .filter(Column::Id.eq(row.id))
                .exec_with_returning(&txn)
                .await
                .map_err(map_db_err)?
                .first()
                .map(|m| m.to_domain())
                .ok_or_else(|| {
                    HeroRepositoryError::DatabaseError("hero row vanished during update".into())
                })?,
            None => insert_row(&txn, content).await.map_err(map_db_err)?,
        };

        txn.commit().await.map_err(map_db_err)?;
        Ok(hero)
    }
}

fn map_db_err(e: DbErr) -> HeroRepositoryError {
    HeroRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::adapter::outgoing::sea_orm_entity::Model;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn row(name: &str) -> Model {
        let now = Utc::now().fixed_offset();
        let content = HeroContent::default();
        Model {
            id: Uuid::new_v4(),
            name: name.into(),
            title: content.title,
            location: content.location,
            languages: content.languages,
            profession: content.profession,
            university: content.university,
            is_available: true,
            profile_image: String::new(),
            resume_url: String::new(),
            bio: content.bio,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_on_empty_table_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let repo = HeroRepositoryPostgres::new(Arc::new(db));

        assert!(repo.find().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_updates_existing_row() {
        let existing = row("Old");
        let mut updated = existing.clone();
        updated.name = "New".into();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![updated]])
            .into_connection();
        let repo = HeroRepositoryPostgres::new(Arc::new(db));

        let hero = repo
            .upsert(HeroContent {
                name: "New".into(),
                ..HeroContent::default()
            })
            .await
            .unwrap();

        assert_eq!(hero.id, existing.id);
        assert_eq!(hero.content.name, "New");
    }

    #[tokio::test]
    async fn upsert_inserts_when_empty() {
        let inserted = row("Fresh");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new(), vec![inserted.clone()]])
            .into_connection();
        let repo = HeroRepositoryPostgres::new(Arc::new(db));

        let hero = repo.upsert(HeroContent::default()).await.unwrap();

        assert_eq!(hero.id, inserted.id);
    }

    #[tokio::test]
    async fn find_error_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection error".into())])
            .into_connection();
        let repo = HeroRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.find().await,
            Err(HeroRepositoryError::DatabaseError(_))
        ));
    }
}
