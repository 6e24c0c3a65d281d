// SQL Server backend
//
// - config: options, builder, and the bb8-tiberius pool
// - params: RowValues -> bound tiberius query parameters
// - query: result streams -> ResultSet
// - executor: select/dml/call/version on a pooled client

pub mod config;
pub mod executor;
pub mod params;
pub mod query;

pub use config::{MssqlClient, MssqlOptions, MssqlOptionsBuilder};
pub use executor::{execute_call, execute_dml, execute_select, server_version};
pub use params::{bind_procedure_params, bind_query_params};
