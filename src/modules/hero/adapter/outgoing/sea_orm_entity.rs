use sea_orm::entity::prelude::*;

use crate::hero::application::domain::entities::{Hero, HeroContent};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hero")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub location: String,
    pub languages: String,
    pub profession: String,
    pub university: String,
    pub is_available: bool,
    #[sea_orm(column_type = "Text")]
    pub profile_image: String,
    #[sea_orm(column_type = "Text")]
    pub resume_url: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Hero {
        Hero {
            id: self.id,
            content: HeroContent {
                name: self.name.clone(),
                title: self.title.clone(),
                location: self.location.clone(),
                languages: self.languages.clone(),
                profession: self.profession.clone(),
                university: self.university.clone(),
                is_available: self.is_available,
                profile_image: self.profile_image.clone(),
                resume_url: self.resume_url.clone(),
                bio: self.bio.clone(),
            },
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
