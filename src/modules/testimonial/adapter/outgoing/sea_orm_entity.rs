use sea_orm::entity::prelude::*;

use crate::testimonial::application::domain::entities::Testimonial;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub rating: i16,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub avatar: Option<String>,
    pub date: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Testimonial {
        Testimonial {
            id: self.id,
            name: self.name.clone(),
            city: self.city.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
            avatar: self.avatar.clone(),
            date: self.date.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
