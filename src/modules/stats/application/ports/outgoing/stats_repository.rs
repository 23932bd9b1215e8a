use async_trait::async_trait;

use crate::stats::application::domain::entities::{Stats, StatsCounters};

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn find(&self) -> Result<Option<Stats>, StatsRepositoryError>;

    async fn insert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError>;

    async fn upsert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError>;
}
