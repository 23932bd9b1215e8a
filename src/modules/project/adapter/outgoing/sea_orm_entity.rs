use sea_orm::entity::prelude::*;

use crate::project::application::domain::entities::{Project, ProjectStatus};
use crate::shared::persistence::to_string_list;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    pub featured: bool,

    pub status: String,

    pub sort_order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Project {
        Project {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tech_stack: to_string_list(&self.tech_stack),
            url: self.url.clone(),
            github_url: self.github_url.clone(),
            featured: self.featured,
            status: ProjectStatus::parse(&self.status).unwrap_or_default(),
            order: self.sort_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
