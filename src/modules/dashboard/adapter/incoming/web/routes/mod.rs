mod overview;

pub use overview::get_overview_handler;
