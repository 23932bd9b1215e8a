pub mod sea_orm_entity;
mod technology_repository_postgres;

pub use technology_repository_postgres::TechnologyRepositoryPostgres;
