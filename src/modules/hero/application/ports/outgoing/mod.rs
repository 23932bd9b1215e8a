mod hero_repository;

pub use hero_repository::{HeroRepository, HeroRepositoryError};
