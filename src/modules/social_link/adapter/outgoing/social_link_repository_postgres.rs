use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::social_link::application::{
    domain::entities::SocialLink,
    ports::outgoing::{SocialLinkData, SocialLinkRepository, SocialLinkRepositoryError},
};

#[derive(Clone)]
pub struct SocialLinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialLinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: SocialLinkData) -> ActiveModel {
    ActiveModel {
        platform: Set(data.platform),
        username: Set(data.username),
        url: Set(data.url),
        is_active: Set(data.is_active),
        sort_order: Set(data.order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl SocialLinkRepository for SocialLinkRepositoryPostgres {
    async fn list(&self, active_only: bool) -> Result<Vec<SocialLink>, SocialLinkRepositoryError> {
        let mut query = Entity::find();
        if active_only {
            query = query.filter(Column::IsActive.eq(true));
        }

        let rows = query
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, data: SocialLinkData) -> Result<SocialLink, SocialLinkRepositoryError> {
        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: SocialLinkData,
    ) -> Result<SocialLink, SocialLinkRepositoryError> {
        let updated = Entity::update_many()
            .set(active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(SocialLinkRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SocialLinkRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(SocialLinkRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SocialLinkRepositoryError {
    SocialLinkRepositoryError::DatabaseError(e.to_string())
}
