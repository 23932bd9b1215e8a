use sea_orm::entity::prelude::*;

use crate::resume::application::domain::entities::Resume;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub public_id: String,
    pub is_active: bool,
    pub uploaded_by: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Resume {
        Resume {
            id: self.id,
            file_name: self.file_name.clone(),
            file_url: self.file_url.clone(),
            public_id: self.public_id.clone(),
            is_active: self.is_active,
            uploaded_by: self.uploaded_by.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
