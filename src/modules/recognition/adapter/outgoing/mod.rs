mod recognition_repository_postgres;
pub mod sea_orm_entity;

pub use recognition_repository_postgres::RecognitionRepositoryPostgres;
