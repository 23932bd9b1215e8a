use async_trait::async_trait;

use crate::dashboard::application::{
    domain::entities::Overview,
    ports::{
        incoming::use_cases::{DashboardError, DashboardUseCase},
        outgoing::{OverviewQuery, OverviewQueryError},
    },
};

#[derive(Debug, Clone)]
pub struct DashboardService<Q: OverviewQuery> {
    query: Q,
}

impl<Q: OverviewQuery> DashboardService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl From<OverviewQueryError> for DashboardError {
    fn from(err: OverviewQueryError) -> Self {
        let OverviewQueryError::DatabaseError(e) = err;
        DashboardError::QueryError(e)
    }
}

#[async_trait]
impl<Q: OverviewQuery> DashboardUseCase for DashboardService<Q> {
    async fn overview(&self) -> Result<Overview, DashboardError> {
        Ok(self.query.counts().await?)
    }
}
