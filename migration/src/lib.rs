pub use sea_orm_migration::prelude::*;

mod triggers;

mod m20261001_000001_create_updated_at_function;
mod m20261001_000002_create_table_hero;
mod m20261001_000003_create_table_about;
mod m20261001_000004_create_table_stats;
mod m20261001_000005_create_table_projects;
mod m20261001_000006_create_table_testimonials;
mod m20261001_000007_create_table_technologies;
mod m20261001_000008_create_table_solutions;
mod m20261001_000009_create_table_recognitions;
mod m20261001_000010_create_table_social_links;
mod m20261001_000011_create_table_contact_messages;
mod m20261001_000012_create_table_newsletter_subscribers;
mod m20261001_000013_create_table_resumes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_updated_at_function::Migration),
            Box::new(m20261001_000002_create_table_hero::Migration),
            Box::new(m20261001_000003_create_table_about::Migration),
            Box::new(m20261001_000004_create_table_stats::Migration),
            Box::new(m20261001_000005_create_table_projects::Migration),
            Box::new(m20261001_000006_create_table_testimonials::Migration),
            Box::new(m20261001_000007_create_table_technologies::Migration),
            Box::new(m20261001_000008_create_table_solutions::Migration),
            Box::new(m20261001_000009_create_table_recognitions::Migration),
            Box::new(m20261001_000010_create_table_social_links::Migration),
            Box::new(m20261001_000011_create_table_contact_messages::Migration),
            Box::new(m20261001_000012_create_table_newsletter_subscribers::Migration),
            Box::new(m20261001_000013_create_table_resumes::Migration),
        ]
    }
}
