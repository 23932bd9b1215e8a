use async_trait::async_trait;

use crate::dashboard::application::domain::entities::Overview;

#[derive(Debug, Clone, thiserror::Error)]
pub enum OverviewQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OverviewQuery: Send + Sync {
    async fn counts(&self) -> Result<Overview, OverviewQueryError>;
}
