use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::contact::application::{
    domain::entities::{
        ContactFilter, ContactMessage, ContactStatus, ContactStatusChange, NewContactMessage,
    },
    ports::outgoing::{ContactRepository, ContactRepositoryError},
};
use crate::shared::persistence::contains_pattern;

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(message.name),
            email: Set(message.email),
            phone: Set(message.phone),
            subject: Set(message.subject),
            message: Set(message.message),
            status: Set(ContactStatus::New.as_str().to_string()),
            is_read: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn list(
        &self,
        filter: &ContactFilter,
    ) -> Result<Vec<ContactMessage>, ContactRepositoryError> {
        let mut query = Entity::find();

        if let Some(search) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            let pattern = contains_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern))
                    .add(Expr::col(Column::Subject).ilike(&pattern))
                    .add(Expr::col(Column::Message).ilike(&pattern)),
            );
        }

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn update_status(
        &self,
        id: Uuid,
        change: ContactStatusChange,
    ) -> Result<ContactMessage, ContactRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        if let Some(status) = change.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(is_read) = change.is_read {
            model.is_read = Set(is_read);
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_domain())
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
