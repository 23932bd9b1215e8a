use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::newsletter::application::{
    domain::entities::Subscriber,
    ports::outgoing::{SubscriberRepository, SubscriberRepositoryError},
};
use crate::shared::persistence::{contains_pattern, is_unique_violation};

#[derive(Clone)]
pub struct SubscriberRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriberRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriberRepository for SubscriberRepositoryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Subscriber>, SubscriberRepositoryError> {
        let row = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn create(&self, email: &str) -> Result<Subscriber, SubscriberRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            is_active: Set(true),
            subscribed_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&*self.db).await {
            Ok(inserted) => Ok(inserted.to_domain()),
            Err(e) if is_unique_violation(&e) => {
                warn!("Newsletter insert hit the unique email index");
                Err(SubscriberRepositoryError::Duplicate)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn list(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<Subscriber>, SubscriberRepositoryError> {
        let mut query = Entity::find();

        if let Some(search) = search {
            query = query.filter(Expr::col(Column::Email).ilike(contains_pattern(search)));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(SubscriberRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> SubscriberRepositoryError {
    SubscriberRepositoryError::DatabaseError(e.to_string())
}
