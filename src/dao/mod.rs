//! The query surface: parameter binding, row mapping, paging, and procedure calls on top of
//! any [`SqlExecutor`].

mod dml;
mod paging;
mod procedure;
mod select;
mod vendor;

use std::sync::Arc;

use crate::error::SqlDaoError;
use crate::executor::SqlExecutor;
use crate::pagination::PagingDialect;
use crate::params::Parameter;
use crate::translation::{BoundStatement, bind_statement};

#[cfg(any(feature = "sqlite", feature = "postgres", feature = "mssql"))]
use crate::pool::ConfigAndPool;

/// Runs templated SQL through an executor.
///
/// ```rust,no_run
/// use sql_dao::prelude::*;
///
/// # async fn demo(cap: ConfigAndPool) -> Result<(), SqlDaoError> {
/// let dao = SqlDao::from_pool(cap);
///
/// let mut params = NameParameter::new();
/// params.add("status", "open");
/// let criteria = Criteria::paged(1, 20).sort_desc("created_at");
///
/// let page: Paging<serde_json::Value> = dao
///     .query_with_paging(
///         "SELECT id, title, created_at FROM tickets WHERE status = :status",
///         &params.into(),
///         Some(&criteria),
///     )
///     .await?;
/// println!("{} of {}", page.items.len(), page.total_elements);
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct SqlDao {
    executor: Arc<dyn SqlExecutor>,
    dialect: PagingDialect,
}

impl std::fmt::Debug for SqlDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlDao")
            .field("dialect", &self.dialect)
            .field("placeholder_style", &self.executor.placeholder_style())
            .finish_non_exhaustive()
    }
}

/// Builder for [`SqlDao`]. An executor is required; the dialect defaults to
/// [`PagingDialect::OffsetFetch`].
#[derive(Default)]
pub struct DaoBuilder {
    executor: Option<Arc<dyn SqlExecutor>>,
    dialect: Option<PagingDialect>,
}

impl DaoBuilder {
    #[must_use]
    pub fn executor(mut self, executor: impl SqlExecutor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    #[must_use]
    pub fn shared_executor(mut self, executor: Arc<dyn SqlExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    #[must_use]
    pub fn dialect(mut self, dialect: PagingDialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// # Errors
    /// Returns [`SqlDaoError::ConfigError`] when no executor was supplied.
    pub fn build(self) -> Result<SqlDao, SqlDaoError> {
        let executor = self
            .executor
            .ok_or_else(|| SqlDaoError::ConfigError("SqlDao requires an executor".to_string()))?;
        Ok(SqlDao {
            executor,
            dialect: self.dialect.unwrap_or_default(),
        })
    }
}

impl SqlDao {
    #[must_use]
    pub fn builder() -> DaoBuilder {
        DaoBuilder::default()
    }

    /// A DAO over a shipped pool, paging in the backend's default dialect.
    #[cfg(any(feature = "sqlite", feature = "postgres", feature = "mssql"))]
    #[must_use]
    pub fn from_pool(cap: ConfigAndPool) -> Self {
        let dialect = cap.db_type.default_dialect();
        Self {
            executor: Arc::new(cap),
            dialect,
        }
    }

    #[must_use]
    pub fn dialect(&self) -> PagingDialect {
        self.dialect
    }

    #[must_use]
    pub fn executor(&self) -> &Arc<dyn SqlExecutor> {
        &self.executor
    }

    /// Wrap a value for `LIKE '%value%'`.
    #[must_use]
    pub fn like_contains(value: &str) -> String {
        format!("%{value}%")
    }

    #[must_use]
    pub fn like_starts_with(value: &str) -> String {
        format!("{value}%")
    }

    #[must_use]
    pub fn like_ends_with(value: &str) -> String {
        format!("%{value}")
    }

    fn bind<'a>(&self, sql: &'a str, params: &Parameter) -> Result<BoundStatement<'a>, SqlDaoError> {
        bind_statement(sql, params, self.executor.placeholder_style())
    }
}

/// Debug-log a statement before it runs.
pub(crate) fn log_statement<T: ?Sized>(sql: &str, params: &Parameter) {
    tracing::debug!(
        sql,
        params = ?params.to_map_parameter(),
        returns = std::any::type_name::<T>(),
        "executing statement"
    );
}
