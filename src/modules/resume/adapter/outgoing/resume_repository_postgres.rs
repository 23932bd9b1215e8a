use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::resume::application::{
    domain::entities::{NewResume, Resume},
    ports::outgoing::{ResumeRepository, ResumeRepositoryError},
};

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn find_active(&self) -> Result<Option<Resume>, ResumeRepositoryError> {
        let row = Entity::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>, ResumeRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|m| m.to_domain()))
    }

    async fn replace_active(&self, resume: NewResume) -> Result<Resume, ResumeRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let now = Utc::now().fixed_offset();

        Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        let inserted = ActiveModel {
            id: Set(Uuid::new_v4()),
            file_name: Set(resume.file_name),
            file_url: Set(resume.file_url),
            public_id: Set(resume.public_id),
            is_active: Set(true),
            uploaded_by: Set(resume.uploaded_by),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(inserted.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ResumeRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}
