pub mod config;
pub mod query;
pub mod status;

pub use query::run_query;
pub use status::show_status;
