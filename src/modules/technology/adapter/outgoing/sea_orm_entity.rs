use sea_orm::entity::prelude::*;

use crate::technology::application::domain::entities::{TechCategory, Technology};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "technologies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub proficiency: i16,
    #[sea_orm(column_type = "Text", nullable)]
    pub logo: Option<String>,
    pub work_as: Option<String>,
    pub color: String,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Technology {
        Technology {
            id: self.id,
            name: self.name.clone(),
            category: TechCategory::parse(&self.category).unwrap_or_default(),
            proficiency: self.proficiency,
            logo: self.logo.clone(),
            work_as: self.work_as.clone(),
            color: self.color.clone(),
            is_active: self.is_active,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
