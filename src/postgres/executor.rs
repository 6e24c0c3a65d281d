use deadpool_postgres::Pool;

use crate::error::SqlDaoError;
use crate::executor::ProcedureBinding;
use crate::results::ResultSet;
use crate::types::RowValues;

use super::params::Params;
use super::query::build_result_set_from_statement;

/// Execute a SELECT on a pooled client. Statements are prepared through the client's cache.
///
/// # Errors
/// Returns errors from pool checkout, preparation, or query execution.
pub async fn execute_select(
    pool: &Pool,
    query: &str,
    params: &[RowValues],
) -> Result<ResultSet, SqlDaoError> {
    let client = pool.get().await?;
    let stmt = client.prepare_cached(query).await?;
    let converted = Params::convert(params);
    let rows = client.query(&stmt, converted.as_refs()).await?;
    build_result_set_from_statement(&stmt, &rows)
}

/// Execute a DML statement on a pooled client.
///
/// # Errors
/// Returns errors from pool checkout, preparation, or execution.
pub async fn execute_dml(
    pool: &Pool,
    query: &str,
    params: &[RowValues],
) -> Result<usize, SqlDaoError> {
    let client = pool.get().await?;
    let stmt = client.prepare_cached(query).await?;
    let converted = Params::convert(params);
    let rows = client.execute(&stmt, converted.as_refs()).await?;
    usize::try_from(rows).map_err(|e| {
        SqlDaoError::ExecutionError(format!("postgres affected rows conversion error: {e}"))
    })
}

/// Run a rendered `CALL`. Postgres returns OUT and INOUT arguments as a single row; NULL
/// arguments take their type from the procedure signature.
///
/// # Errors
/// Returns errors from pool checkout, preparation, or execution.
pub async fn execute_call(
    pool: &Pool,
    query: &str,
    params: &[ProcedureBinding],
) -> Result<ResultSet, SqlDaoError> {
    let values: Vec<RowValues> = params.iter().map(|p| p.value.clone()).collect();
    execute_select(pool, query, &values).await
}

/// Server version string, e.g. `PostgreSQL 16.2 on x86_64-pc-linux-gnu, ...`.
///
/// # Errors
/// Returns errors from pool checkout or the version query.
pub async fn server_version(pool: &Pool) -> Result<String, SqlDaoError> {
    let client = pool.get().await?;
    let row = client.query_one("SELECT version()", &[]).await?;
    Ok(row.try_get::<_, String>(0)?)
}
