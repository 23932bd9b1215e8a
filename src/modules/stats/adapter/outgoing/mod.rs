pub mod sea_orm_entity;
mod stats_repository_postgres;

pub use stats_repository_postgres::StatsRepositoryPostgres;
