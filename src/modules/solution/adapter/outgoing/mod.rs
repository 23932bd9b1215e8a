pub mod sea_orm_entity;
mod solution_repository_postgres;

pub use solution_repository_postgres::SolutionRepositoryPostgres;
