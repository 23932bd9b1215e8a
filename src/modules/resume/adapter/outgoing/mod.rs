mod resume_repository_postgres;
pub mod sea_orm_entity;

pub use resume_repository_postgres::ResumeRepositoryPostgres;
