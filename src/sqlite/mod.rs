// SQLite backend
//
// - config: options, builder, and deadpool pool creation
// - params: RowValues -> rusqlite values
// - query: rusqlite rows -> ResultSet
// - executor: select/dml/version on a pooled connection

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use executor::{execute_dml, execute_select, sqlite_version};
pub use query::build_result_set;
