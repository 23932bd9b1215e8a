use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::outgoing::{TestimonialData, TestimonialRepository, TestimonialRepositoryError},
};

#[derive(Clone)]
pub struct TestimonialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TestimonialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_model(data: TestimonialData) -> ActiveModel {
    ActiveModel {
        name: Set(data.name),
        city: Set(data.city),
        rating: Set(data.rating),
        comment: Set(data.comment),
        avatar: Set(data.avatar),
        date: Set(data.date),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(
        &self,
        data: TestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let mut model = active_model(data);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: TestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError> {
        let updated = Entity::update_many()
            .set(active_model(data))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(TestimonialRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TestimonialRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TestimonialRepositoryError {
    TestimonialRepositoryError::DatabaseError(e.to_string())
}
