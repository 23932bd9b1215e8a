mod technology_repository;

pub use technology_repository::{TechnologyData, TechnologyRepository, TechnologyRepositoryError};
