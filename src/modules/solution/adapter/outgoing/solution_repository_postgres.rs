use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::solution::application::{
    domain::entities::Solution,
    ports::outgoing::{SolutionData, SolutionRepository, SolutionRepositoryError},
};

#[derive(Clone)]
pub struct SolutionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SolutionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SolutionRepository for SolutionRepositoryPostgres {
    async fn list(&self, active_only: bool) -> Result<Vec<Solution>, SolutionRepositoryError> {
        let mut query = Entity::find();
        if active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        let rows = query
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, data: SolutionData) -> Result<Solution, SolutionRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            is_active: Set(data.is_active),
            sort_order: Set(data.order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: SolutionData,
    ) -> Result<Solution, SolutionRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            is_active: Set(data.is_active),
            sort_order: Set(data.order),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(SolutionRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SolutionRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(SolutionRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SolutionRepositoryError {
    SolutionRepositoryError::DatabaseError(e.to_string())
}
