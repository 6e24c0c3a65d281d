//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::criteria::{
    Criteria, Paging, ProcedureCriteria, ProcedureDirection, ProcedureParam,
};
pub use crate::dao::{DaoBuilder, SqlDao};
pub use crate::error::SqlDaoError;
pub use crate::executor::{CallSyntax, ProcedureBinding, SqlExecutor};
pub use crate::mapping::FromRowValue;
pub use crate::pagination::{PaginationStrategy, PagingDialect};
pub use crate::params::{IndexParameter, NameParameter, Parameter};
pub use crate::pool::{ConfigAndPool, DbPool};
pub use crate::results::{CustomDbRow, ResultSet};
pub use crate::sql_types::SqlTypes;
pub use crate::translation::PlaceholderStyle;
pub use crate::types::{DatabaseType, RowValues};
pub use crate::vendor::Vendor;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteOptions, SqliteOptionsBuilder};

#[cfg(feature = "mssql")]
pub use crate::mssql::{MssqlClient, MssqlOptions, MssqlOptionsBuilder};

#[cfg(feature = "postgres")]
pub use deadpool_postgres::Config as PostgresConfig;
