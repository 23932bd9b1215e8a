use sea_orm::entity::prelude::*;

use crate::about::application::domain::entities::{About, AboutContent};
use crate::shared::persistence::to_string_list;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    #[sea_orm(column_type = "Text")]
    pub mission: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub goals: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub currently_learning: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,
    #[sea_orm(column_type = "Text", nullable)]
    pub experience: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> About {
        About {
            id: self.id,
            content: AboutContent {
                bio: self.bio.clone(),
                mission: self.mission.clone(),
                goals: to_string_list(&self.goals),
                currently_learning: to_string_list(&self.currently_learning),
                skills: to_string_list(&self.skills),
                experience: self.experience.clone(),
            },
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
