mod overview_query_postgres;

pub use overview_query_postgres::OverviewQueryPostgres;
