mod executor;
mod types;

pub use executor::{LibsqlStore, StatementExecutor, validate_table_name};
pub use types::*;
