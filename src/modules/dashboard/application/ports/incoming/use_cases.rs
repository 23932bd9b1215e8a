use async_trait::async_trait;

use crate::dashboard::application::domain::entities::Overview;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn overview(&self) -> Result<Overview, DashboardError>;
}
