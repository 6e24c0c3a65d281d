use deadpool_sqlite::{Config as DeadpoolSqliteConfig, Runtime};

use crate::error::SqlDaoError;
use crate::pool::{ConfigAndPool, DbPool};
use crate::types::DatabaseType;

/// Options for configuring a `SQLite` pool.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    pub db_path: String,
    pub max_size: u32,
    pub wal: bool,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            max_size: 4,
            wal: true,
        }
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn max_size(mut self, max_size: u32) -> Self {
        self.opts.max_size = max_size;
        self
    }

    /// Switch the database to `journal_mode = WAL` when the pool starts (on by default).
    #[must_use]
    pub fn wal(mut self, wal: bool) -> Self {
        self.opts.wal = wal;
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Build a `ConfigAndPool` for `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns `SqlDaoError` if pool creation or the initial smoke test fails.
    pub async fn build(self) -> Result<ConfigAndPool, SqlDaoError> {
        ConfigAndPool::new_sqlite(self.finish()).await
    }
}

impl ConfigAndPool {
    #[must_use]
    pub fn sqlite_builder(db_path: String) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }

    /// Asynchronous initializer for `ConfigAndPool` with Sqlite using `deadpool_sqlite`.
    ///
    /// Every pool slot opens `db_path` separately, so `:memory:` gives each connection its
    /// own empty database. Use a file path when more than one connection is in play.
    ///
    /// # Errors
    /// Returns `SqlDaoError::ConfigError` for a zero `max_size`, or
    /// `SqlDaoError::ConnectionError` if pool creation or the first checkout fails.
    pub async fn new_sqlite(opts: SqliteOptions) -> Result<Self, SqlDaoError> {
        if opts.max_size == 0 {
            return Err(SqlDaoError::ConfigError(
                "sqlite pool max_size must be at least 1".to_string(),
            ));
        }

        let cfg = DeadpoolSqliteConfig::new(opts.db_path.clone());
        let pool = cfg
            .builder(Runtime::Tokio1)
            .map_err(|e| {
                SqlDaoError::ConfigError(format!("Invalid SQLite pool configuration: {e}"))
            })?
            .max_size(opts.max_size as usize)
            .build()
            .map_err(|e| {
                SqlDaoError::ConnectionError(format!("Failed to create SQLite pool: {e}"))
            })?;

        {
            let conn = pool.get().await?;
            if opts.wal {
                let mode = conn
                    .interact(|conn| {
                        conn.query_row("PRAGMA journal_mode = WAL", [], |row| {
                            row.get::<_, String>(0)
                        })
                    })
                    .await??;
                tracing::debug!(journal_mode = %mode, "sqlite journal mode set");
            }
        }

        tracing::debug!(path = %opts.db_path, max_size = opts.max_size, "sqlite pool ready");

        Ok(ConfigAndPool {
            pool: DbPool::Sqlite(pool),
            db_type: DatabaseType::Sqlite,
        })
    }
}

/// Convert `InteractError` to a more specific `SqlDaoError`
impl From<deadpool_sqlite::InteractError> for SqlDaoError {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        SqlDaoError::ConnectionError(format!("SQLite Interact Error: {err}"))
    }
}
