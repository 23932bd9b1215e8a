use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::recognition::application::{
    domain::entities::Recognition,
    ports::outgoing::{RecognitionData, RecognitionRepository, RecognitionRepositoryError},
};

#[derive(Clone)]
pub struct RecognitionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RecognitionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: RecognitionData) -> ActiveModel {
    ActiveModel {
        title: Set(data.title),
        description: Set(data.description),
        icon: Set(data.icon),
        color: Set(data.color),
        date: Set(data.date),
        issuer: Set(data.issuer),
        credential_url: Set(data.credential_url),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl RecognitionRepository for RecognitionRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Recognition>, RecognitionRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(
        &self,
        data: RecognitionData,
    ) -> Result<Recognition, RecognitionRepositoryError> {
        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: RecognitionData,
    ) -> Result<Recognition, RecognitionRepositoryError> {
        let updated = Entity::update_many()
            .set(active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(RecognitionRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RecognitionRepositoryError> {
        let res = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(RecognitionRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> RecognitionRepositoryError {
    RecognitionRepositoryError::DatabaseError(e.to_string())
}
