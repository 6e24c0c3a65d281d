use async_trait::async_trait;

#[cfg(feature = "postgres")]
use deadpool_postgres::Pool as DeadpoolPostgresPool;

use crate::error::SqlDaoError;
use crate::executor::{CallSyntax, ProcedureBinding, SqlExecutor};
use crate::results::ResultSet;
use crate::translation::PlaceholderStyle;
use crate::types::{DatabaseType, RowValues};

#[cfg(feature = "mssql")]
use crate::mssql;
#[cfg(feature = "postgres")]
use crate::postgres;
#[cfg(feature = "sqlite")]
use crate::sqlite;

/// Connection pool for database access
///
/// This enum wraps the different connection pool types for the
/// supported database engines.
#[derive(Clone)]
pub enum DbPool {
    /// `PostgreSQL` connection pool
    #[cfg(feature = "postgres")]
    Postgres(DeadpoolPostgresPool),
    /// `SQLite` connection pool
    #[cfg(feature = "sqlite")]
    Sqlite(deadpool_sqlite::Pool),
    /// SQL Server connection pool
    #[cfg(feature = "mssql")]
    Mssql(bb8::Pool<bb8_tiberius::ConnectionManager>),
}

impl std::fmt::Debug for DbPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "postgres")]
            Self::Postgres(pool) => f.debug_tuple("Postgres").field(&pool.status()).finish(),
            #[cfg(feature = "sqlite")]
            Self::Sqlite(pool) => f.debug_tuple("Sqlite").field(&pool.status()).finish(),
            #[cfg(feature = "mssql")]
            Self::Mssql(pool) => f.debug_tuple("Mssql").field(&pool.state()).finish(),
            #[allow(unreachable_patterns)]
            _ => f.write_str("DbPool"),
        }
    }
}

/// Configuration and connection pool for a database
///
/// This struct holds both the configuration and the connection pool
/// for a database, and is the [`SqlExecutor`] a [`crate::dao::SqlDao`] runs on.
#[derive(Clone, Debug)]
pub struct ConfigAndPool {
    /// The connection pool
    pub pool: DbPool,
    /// The database type
    pub db_type: DatabaseType,
}

fn not_enabled() -> SqlDaoError {
    SqlDaoError::Unimplemented("This database type is not enabled in the current build".to_string())
}

#[async_trait]
impl SqlExecutor for ConfigAndPool {
    fn placeholder_style(&self) -> PlaceholderStyle {
        match self.db_type {
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => PlaceholderStyle::Dollar,
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => PlaceholderStyle::Numbered,
            #[cfg(feature = "mssql")]
            DatabaseType::Mssql => PlaceholderStyle::AtP,
        }
    }

    fn call_syntax(&self) -> CallSyntax {
        match self.db_type {
            #[cfg(feature = "postgres")]
            DatabaseType::Postgres => CallSyntax::Call,
            #[cfg(feature = "sqlite")]
            DatabaseType::Sqlite => CallSyntax::JdbcEscape,
            #[cfg(feature = "mssql")]
            DatabaseType::Mssql => CallSyntax::Exec,
        }
    }

    async fn select(&self, sql: &str, params: &[RowValues]) -> Result<ResultSet, SqlDaoError> {
        match &self.pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => postgres::execute_select(pool, sql, params).await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => sqlite::execute_select(pool, sql, params).await,
            #[cfg(feature = "mssql")]
            DbPool::Mssql(pool) => mssql::execute_select(pool, sql, params).await,
            #[allow(unreachable_patterns)]
            _ => Err(not_enabled()),
        }
    }

    async fn dml(&self, sql: &str, params: &[RowValues]) -> Result<usize, SqlDaoError> {
        match &self.pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => postgres::execute_dml(pool, sql, params).await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => sqlite::execute_dml(pool, sql, params).await,
            #[cfg(feature = "mssql")]
            DbPool::Mssql(pool) => mssql::execute_dml(pool, sql, params).await,
            #[allow(unreachable_patterns)]
            _ => Err(not_enabled()),
        }
    }

    async fn call(
        &self,
        sql: &str,
        params: &[ProcedureBinding],
    ) -> Result<ResultSet, SqlDaoError> {
        match &self.pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => postgres::execute_call(pool, sql, params).await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(_) => Err(SqlDaoError::Unimplemented(
                "SQLite has no stored procedures".to_string(),
            )),
            #[cfg(feature = "mssql")]
            DbPool::Mssql(pool) => mssql::execute_call(pool, sql, params).await,
            #[allow(unreachable_patterns)]
            _ => Err(not_enabled()),
        }
    }

    async fn product_name(&self) -> Result<String, SqlDaoError> {
        match &self.pool {
            #[cfg(feature = "postgres")]
            DbPool::Postgres(pool) => postgres::server_version(pool).await,
            #[cfg(feature = "sqlite")]
            DbPool::Sqlite(pool) => Ok(format!("SQLite {}", sqlite::sqlite_version(pool).await?)),
            #[cfg(feature = "mssql")]
            DbPool::Mssql(pool) => mssql::server_version(pool).await,
            #[allow(unreachable_patterns)]
            _ => Err(not_enabled()),
        }
    }
}
