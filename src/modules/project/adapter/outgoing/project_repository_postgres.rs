use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity};
use crate::project::application::{
    domain::entities::Project,
    ports::outgoing::{ProjectData, ProjectRepository, ProjectRepositoryError},
};
use crate::shared::persistence::from_string_list;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Sets every writable column from `data`; id and created_at stay untouched.
fn apply(model: &mut ActiveModel, data: ProjectData) {
    model.title = Set(data.title);
    model.description = Set(data.description);
    model.image = Set(data.image);
    model.tech_stack = Set(from_string_list(data.tech_stack));
    model.url = Set(data.url);
    model.github_url = Set(data.github_url);
    model.featured = Set(data.featured);
    model.status = Set(data.status.as_str().to_string());
    model.sort_order = Set(data.order);
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::SortOrder)
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn create(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut model = ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply(&mut model, data);

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn update(&self, id: Uuid, data: ProjectData) -> Result<Project, ProjectRepositoryError> {
        let mut model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        apply(&mut model, data);

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(ProjectRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
