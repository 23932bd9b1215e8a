use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::stats::application::{
    domain::entities::{Stats, StatsCounters},
    ports::outgoing::{StatsRepository, StatsRepositoryError},
};

#[derive(Clone)]
pub struct StatsRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(counters: StatsCounters) -> ActiveModel {
    ActiveModel {
        projects_completed: Set(counters.projects_completed),
        happy_clients: Set(counters.happy_clients),
        years_experience: Set(counters.years_experience),
        technologies_mastered: Set(counters.technologies_mastered),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

fn new_row(counters: StatsCounters) -> ActiveModel {
    let mut model = active_model(counters);
    model.id = Set(Uuid::new_v4());
    model.created_at = Set(Utc::now().fixed_offset());
    model
}

#[async_trait]
impl StatsRepository for StatsRepositoryPostgres {
    async fn find(&self) -> Result<Option<Stats>, StatsRepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn insert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError> {
        let inserted = new_row(counters)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn upsert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let existing = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            Some(row) => Entity::update_many()
                .set(active_model(counters))
                .filter(Column::Id.eq(row.id))
                .exec_with_returning(&txn)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .next()
                .unwrap_or(row),
            None => new_row(counters).insert(&txn).await.map_err(map_db_err)?,
        };

        txn.commit().await.map_err(map_db_err)?;
        Ok(model.to_domain())
    }
}

fn map_db_err(e: DbErr) -> StatsRepositoryError {
    StatsRepositoryError::DatabaseError(e.to_string())
}
