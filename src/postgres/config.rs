use deadpool_postgres::Config as PgConfig;
use tokio_postgres::NoTls;

use crate::error::SqlDaoError;
use crate::pool::{ConfigAndPool, DbPool};
use crate::types::DatabaseType;

impl ConfigAndPool {
    /// Asynchronous initializer for `ConfigAndPool` with Postgres.
    ///
    /// No connection is opened here; the first statement does that.
    ///
    /// # Errors
    /// Returns `SqlDaoError::ConfigError` if required config fields are missing or `SqlDaoError::ConnectionError` if pool creation fails.
    #[allow(clippy::unused_async)]
    pub async fn new_postgres(pg_config: PgConfig) -> Result<Self, SqlDaoError> {
        let required = [
            ("dbname", pg_config.dbname.is_none()),
            ("host", pg_config.host.is_none()),
            ("port", pg_config.port.is_none()),
            ("user", pg_config.user.is_none()),
            ("password", pg_config.password.is_none()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, missing)| *missing) {
            return Err(SqlDaoError::ConfigError(format!("{field} is required")));
        }

        let pg_pool = pg_config
            .create_pool(Some(deadpool_postgres::Runtime::Tokio1), NoTls)
            .map_err(|e| {
                SqlDaoError::ConnectionError(format!("Failed to create Postgres pool: {e}"))
            })?;

        tracing::debug!(
            host = ?pg_config.host,
            dbname = ?pg_config.dbname,
            "postgres pool ready"
        );

        Ok(ConfigAndPool {
            pool: DbPool::Postgres(pg_pool),
            db_type: DatabaseType::Postgres,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_fields_are_config_errors() {
        let mut cfg = PgConfig::new();
        cfg.dbname = Some("app".into());
        cfg.host = Some("localhost".into());
        cfg.port = Some(5432);
        cfg.user = Some("app".into());

        let err = ConfigAndPool::new_postgres(cfg).await.unwrap_err();
        assert!(matches!(err, SqlDaoError::ConfigError(msg) if msg == "password is required"));
    }
}
