use async_trait::async_trait;
use tracing::info;

use crate::hero::application::{
    domain::entities::{Hero, HeroContent},
    ports::{
        incoming::use_cases::{HeroError, HeroUseCase, UpdateHeroCommand},
        outgoing::{HeroRepository, HeroRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct HeroService<R: HeroRepository> {
    repository: R,
}

impl<R: HeroRepository> HeroService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<HeroRepositoryError> for HeroError {
    fn from(err: HeroRepositoryError) -> Self {
        match err {
            HeroRepositoryError::DatabaseError(e) => HeroError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: HeroRepository> HeroUseCase for HeroService<R> {
    async fn get(&self) -> Result<Hero, HeroError> {
        if let Some(hero) = self.repository.find().await? {
            return Ok(hero);
        }

        let hero = self.repository.insert(HeroContent::default()).await?;
        info!(hero_id = %hero.id, "Seeded default hero section");
        Ok(hero)
    }

    async fn upsert(&self, command: UpdateHeroCommand) -> Result<Hero, HeroError> {
        Ok(self.repository.upsert(command.into_content()).await?)
    }
}
