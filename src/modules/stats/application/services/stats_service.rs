use async_trait::async_trait;
use tracing::info;

use crate::stats::application::{
    domain::entities::{Stats, StatsCounters, StatsView},
    ports::{
        incoming::use_cases::{StatsError, StatsUseCase, UpdateStatsCommand},
        outgoing::{StatsRepository, StatsRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct StatsService<R: StatsRepository> {
    repository: R,
}

impl<R: StatsRepository> StatsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<StatsRepositoryError> for StatsError {
    fn from(err: StatsRepositoryError) -> Self {
        match err {
            StatsRepositoryError::DatabaseError(e) => StatsError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: StatsRepository> StatsUseCase for StatsService<R> {
    async fn get_public(&self) -> Result<StatsView, StatsError> {
        Ok(match self.repository.find().await? {
            Some(stats) => StatsView::Stored(stats),
            None => StatsView::Default(StatsCounters::default()),
        })
    }

    async fn get_or_create(&self) -> Result<Stats, StatsError> {
        if let Some(stats) = self.repository.find().await? {
            return Ok(stats);
        }

        let stats = self.repository.insert(StatsCounters::default()).await?;
        info!(stats_id = %stats.id, "Default stats created");
        Ok(stats)
    }

    async fn upsert(&self, command: UpdateStatsCommand) -> Result<Stats, StatsError> {
        let stats = self.repository.upsert(command.into_counters()).await?;
        info!(stats_id = %stats.id, "Stats updated");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::application::ports::incoming::use_cases::StatsInput;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct InMemoryStatsRepo {
        row: Mutex<Option<Stats>>,
        fail: bool,
    }

    #[async_trait]
    impl StatsRepository for InMemoryStatsRepo {
        async fn find(&self) -> Result<Option<Stats>, StatsRepositoryError> {
            if self.fail {
                return Err(StatsRepositoryError::DatabaseError("down".into()));
            }
            Ok(*self.row.lock().unwrap())
        }

        async fn insert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError> {
            let stats = Stats {
                id: Uuid::new_v4(),
                counters,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            *self.row.lock().unwrap() = Some(stats);
            Ok(stats)
        }

        async fn upsert(&self, counters: StatsCounters) -> Result<Stats, StatsRepositoryError> {
            self.insert(counters).await
        }
    }

    #[tokio::test]
    async fn empty_store_returns_default_without_writing() {
        let service = StatsService::new(InMemoryStatsRepo::default());

        let view = service.get_public().await.unwrap();

        assert_eq!(view, StatsView::Default(StatsCounters::default()));
        assert!(service.repository.row.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn get_or_create_persists_once() {
        let service = StatsService::new(InMemoryStatsRepo::default());

        let first = service.get_or_create().await.unwrap();
        let second = service.get_or_create().await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.counters.projects_completed, 50);
    }

    #[tokio::test]
    async fn upsert_replaces_counters() {
        let service = StatsService::new(InMemoryStatsRepo::default());
        let command = UpdateStatsCommand::new(StatsInput {
            projects_completed: Some(
                crate::stats::application::ports::incoming::use_cases::StatValue::Text(
                    "60+".into(),
                ),
            ),
            ..Default::default()
        })
        .unwrap();

        let stats = service.upsert(command).await.unwrap();

        assert_eq!(stats.counters.projects_completed, 60);
        assert_eq!(stats.counters.happy_clients, 0);
    }

    #[tokio::test]
    async fn repository_failure_is_reported() {
        let service = StatsService::new(InMemoryStatsRepo {
            fail: true,
            ..Default::default()
        });

        let err = service.get_public().await.unwrap_err();

        assert!(matches!(err, StatsError::RepositoryError(msg) if msg == "down"));
    }
}
