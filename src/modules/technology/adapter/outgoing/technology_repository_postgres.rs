use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::technology::application::{
    domain::entities::Technology,
    ports::outgoing::{TechnologyData, TechnologyRepository, TechnologyRepositoryError},
};

#[derive(Clone)]
pub struct TechnologyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechnologyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: TechnologyData) -> ActiveModel {
    ActiveModel {
        name: Set(data.name),
        category: Set(data.category.as_str().to_string()),
        proficiency: Set(data.proficiency),
        logo: Set(data.logo),
        work_as: Set(data.work_as),
        color: Set(data.color),
        is_active: Set(data.is_active),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl TechnologyRepository for TechnologyRepositoryPostgres {
    async fn list(&self, active_only: bool) -> Result<Vec<Technology>, TechnologyRepositoryError> {
        let mut query = Entity::find();
        if active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, data: TechnologyData) -> Result<Technology, TechnologyRepositoryError> {
        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: TechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError> {
        let updated = Entity::update_many()
            .set(active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(TechnologyRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TechnologyRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TechnologyRepositoryError {
    TechnologyRepositoryError::DatabaseError(e.to_string())
}
