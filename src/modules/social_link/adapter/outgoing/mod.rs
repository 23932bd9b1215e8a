pub mod sea_orm_entity;
mod social_link_repository_postgres;

pub use social_link_repository_postgres::SocialLinkRepositoryPostgres;
