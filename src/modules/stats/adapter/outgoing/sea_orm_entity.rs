use sea_orm::entity::prelude::*;

use crate::stats::application::domain::entities::{Stats, StatsCounters};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
    pub technologies_mastered: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Stats {
        Stats {
            id: self.id,
            counters: StatsCounters {
                projects_completed: self.projects_completed,
                happy_clients: self.happy_clients,
                years_experience: self.years_experience,
                technologies_mastered: self.technologies_mastered,
            },
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
