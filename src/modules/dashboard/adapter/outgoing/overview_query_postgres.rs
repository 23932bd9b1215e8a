use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;

use crate::contact::adapter::outgoing::sea_orm_entity as contact_messages;
use crate::dashboard::application::{
    domain::entities::Overview,
    ports::outgoing::{OverviewQuery, OverviewQueryError},
};
use crate::newsletter::adapter::outgoing::sea_orm_entity as subscribers;
use crate::project::adapter::outgoing::sea_orm_entity as projects;
use crate::technology::adapter::outgoing::sea_orm_entity as technologies;
use crate::testimonial::adapter::outgoing::sea_orm_entity as testimonials;

#[derive(Clone)]
pub struct OverviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OverviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OverviewQuery for OverviewQueryPostgres {
    async fn counts(&self) -> Result<Overview, OverviewQueryError> {
        let db = &*self.db;

        let (
            projects,
            testimonials,
            contact_messages,
            unread_messages,
            subscribers,
            active_technologies,
        ) = futures::try_join!(
            projects::Entity::find().count(db),
            testimonials::Entity::find().count(db),
            contact_messages::Entity::find().count(db),
            contact_messages::Entity::find()
                .filter(contact_messages::Column::IsRead.eq(false))
                .count(db),
            subscribers::Entity::find().count(db),
            technologies::Entity::find()
                .filter(technologies::Column::IsActive.eq(true))
                .count(db),
        )
        .map_err(map_db_err)?;

        Ok(Overview {
            projects,
            testimonials,
            contact_messages,
            unread_messages,
            subscribers,
            active_technologies,
        })
    }
}

fn map_db_err(e: DbErr) -> OverviewQueryError {
    OverviewQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> Vec<BTreeMap<&'static str, Value>> {
        vec![BTreeMap::from([("num_items", Value::BigInt(Some(n)))])]
    }

    #[tokio::test]
    async fn collects_every_count() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                count_row(7),
                count_row(3),
                count_row(10),
                count_row(4),
                count_row(25),
                count_row(12),
            ])
            .into_connection();
        let query = OverviewQueryPostgres::new(Arc::new(db));

        let overview = query.counts().await.unwrap();

        assert_eq!(
            overview,
            Overview {
                projects: 7,
                testimonials: 3,
                contact_messages: 10,
                unread_messages: 4,
                subscribers: 25,
                active_technologies: 12,
            }
        );
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();
        let query = OverviewQueryPostgres::new(Arc::new(db));

        let err = query.counts().await.unwrap_err();

        assert!(matches!(err, OverviewQueryError::DatabaseError(_)));
    }
}
