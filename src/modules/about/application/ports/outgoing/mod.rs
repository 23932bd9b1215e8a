mod about_repository;

pub use about_repository::{AboutRepository, AboutRepositoryError};
