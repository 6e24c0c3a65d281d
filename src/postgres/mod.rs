// PostgreSQL backend
//
// - config: pool creation from a deadpool_postgres::Config
// - params: RowValues as tokio_postgres::ToSql
// - query: rows -> ResultSet
// - executor: select/dml/call/version on a pooled client

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use executor::{execute_call, execute_dml, execute_select, server_version};
pub use params::Params;
pub use query::{build_result_set_from_statement, postgres_extract_value};
