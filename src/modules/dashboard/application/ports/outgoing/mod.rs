mod overview_query;

pub use overview_query::{OverviewQuery, OverviewQueryError};
