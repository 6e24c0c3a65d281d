use bb8::Pool;
use bb8_tiberius::{ConnectionManager, rt};
use tiberius::{AuthMethod, Config as TiberiusConfig};

use crate::error::SqlDaoError;
use crate::pool::{ConfigAndPool, DbPool};
use crate::types::DatabaseType;

/// Type alias for SQL Server client
pub type MssqlClient = rt::Client;

/// Options for configuring an MSSQL pool.
#[derive(Debug, Clone)]
pub struct MssqlOptions {
    pub server: String,
    pub database: String,
    pub user: String,
    pub password: String,
    pub port: Option<u16>,
    pub instance_name: Option<String>,
    pub max_size: u32,
}

impl MssqlOptions {
    #[must_use]
    pub fn new(server: String, database: String, user: String, password: String) -> Self {
        Self {
            server,
            database,
            user,
            password,
            port: None,
            instance_name: None,
            max_size: 20,
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_instance_name(mut self, instance_name: Option<String>) -> Self {
        self.instance_name = instance_name;
        self
    }
}

/// Fluent builder for MSSQL options.
#[derive(Debug, Clone)]
pub struct MssqlOptionsBuilder {
    opts: MssqlOptions,
}

impl MssqlOptionsBuilder {
    #[must_use]
    pub fn new(server: String, database: String, user: String, password: String) -> Self {
        Self {
            opts: MssqlOptions::new(server, database, user, password),
        }
    }

    #[must_use]
    pub fn port(mut self, port: Option<u16>) -> Self {
        self.opts.port = port;
        self
    }

    #[must_use]
    pub fn instance_name(mut self, instance_name: Option<String>) -> Self {
        self.opts.instance_name = instance_name;
        self
    }

    #[must_use]
    pub fn max_size(mut self, max_size: u32) -> Self {
        self.opts.max_size = max_size;
        self
    }

    #[must_use]
    pub fn finish(self) -> MssqlOptions {
        self.opts
    }

    /// Build a `ConfigAndPool` for SQL Server.
    ///
    /// # Errors
    ///
    /// Returns `SqlDaoError` if pool creation fails.
    pub async fn build(self) -> Result<ConfigAndPool, SqlDaoError> {
        ConfigAndPool::new_mssql(self.finish()).await
    }
}

impl ConfigAndPool {
    #[must_use]
    pub fn mssql_builder(
        server: String,
        database: String,
        user: String,
        password: String,
    ) -> MssqlOptionsBuilder {
        MssqlOptionsBuilder::new(server, database, user, password)
    }

    /// Asynchronous initializer for `ConfigAndPool` with SQL Server (MSSQL).
    ///
    /// Connections are opened lazily by the pool.
    ///
    /// # Errors
    /// Returns `SqlDaoError::ConfigError` for an empty server or database name.
    #[allow(clippy::unused_async)]
    pub async fn new_mssql(opts: MssqlOptions) -> Result<Self, SqlDaoError> {
        if opts.server.trim().is_empty() {
            return Err(SqlDaoError::ConfigError("server is required".to_string()));
        }
        if opts.database.trim().is_empty() {
            return Err(SqlDaoError::ConfigError("database is required".to_string()));
        }

        let pool = Pool::builder()
            .max_size(opts.max_size)
            .build_unchecked(connection_manager(&opts));

        tracing::debug!(server = %opts.server, database = %opts.database, "mssql pool ready");

        Ok(ConfigAndPool {
            pool: DbPool::Mssql(pool),
            db_type: DatabaseType::Mssql,
        })
    }
}

/// A named instance is located through the SQL Browser service; otherwise the configured
/// host and port are dialed directly.
fn connection_manager(opts: &MssqlOptions) -> ConnectionManager {
    let manager = ConnectionManager::new(build_tiberius_config(opts));
    if opts.instance_name.is_some() {
        manager.using_named_connection()
    } else {
        manager
    }
}

fn build_tiberius_config(opts: &MssqlOptions) -> TiberiusConfig {
    let mut config = TiberiusConfig::new();
    config.host(&opts.server);
    config.database(&opts.database);
    config.port(opts.port.unwrap_or(1433));
    config.authentication(AuthMethod::sql_server(&opts.user, &opts.password));
    if let Some(instance) = &opts.instance_name {
        config.instance_name(instance);
    }
    config.trust_cert();
    config
}
