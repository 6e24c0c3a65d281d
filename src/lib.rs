//! Paged queries, named and positional parameter binding, and stored-procedure calls over
//! SQLite, PostgreSQL, and SQL Server.
//!
//! Statements are written with `?` or `:name` markers. A [`SqlDao`] rewrites them into the
//! backend's native placeholders, pages them in the configured [`PagingDialect`], and maps
//! rows into serde types.
//!
//! ```rust,no_run
//! use sql_dao::prelude::*;
//!
//! # async fn demo() -> Result<(), SqlDaoError> {
//! let cap = ConfigAndPool::sqlite_builder("app.db".to_string()).build().await?;
//! let dao = SqlDao::from_pool(cap);
//!
//! dao.execute("CREATE TABLE IF NOT EXISTS t (id INTEGER, name TEXT)", &Parameter::none())
//!     .await?;
//! let total: Option<i64> = dao
//!     .query_to_object("SELECT COUNT(*) FROM t WHERE name LIKE ?", &Parameter::from(vec![
//!         RowValues::from(SqlDao::like_starts_with("a")),
//!     ]))
//!     .await?;
//! # Ok(()) }
//! ```

pub mod criteria;
pub mod dao;
pub mod error;
pub mod executor;
pub mod mapping;
pub mod pagination;
pub mod params;
pub mod pool;
pub mod prelude;
pub mod results;
pub mod sorting;
pub mod sql_types;
pub mod translation;
pub mod types;
pub mod vendor;

#[cfg(feature = "mssql")]
pub mod mssql;
#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use criteria::{Criteria, Paging, ProcedureCriteria, ProcedureDirection, ProcedureParam};
pub use dao::{DaoBuilder, SqlDao};
pub use error::SqlDaoError;
pub use executor::{CallSyntax, ProcedureBinding, SqlExecutor};
pub use pagination::PagingDialect;
pub use params::{IndexParameter, NameParameter, Parameter};
pub use pool::{ConfigAndPool, DbPool};
pub use results::{CustomDbRow, ResultSet};
pub use sql_types::SqlTypes;
pub use types::{DatabaseType, RowValues};
pub use vendor::Vendor;
