use sea_orm::entity::prelude::*;

use crate::social_link::application::domain::entities::SocialLink;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "social_links")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub platform: String,
    pub username: String,
    #[sea_orm(column_type = "Text")]
    pub url: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> SocialLink {
        SocialLink {
            id: self.id,
            platform: self.platform.clone(),
            username: self.username.clone(),
            url: self.url.clone(),
            is_active: self.is_active,
            order: self.sort_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
