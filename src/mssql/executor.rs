use bb8::Pool;
use bb8_tiberius::ConnectionManager;

use crate::error::SqlDaoError;
use crate::executor::ProcedureBinding;
use crate::results::ResultSet;
use crate::types::RowValues;

use super::params::{bind_procedure_params, bind_query_params};
use super::query::build_result_set;

/// Execute a SELECT on a pooled client.
///
/// # Errors
/// Returns errors from pool checkout or query execution.
pub async fn execute_select(
    pool: &Pool<ConnectionManager>,
    query: &str,
    params: &[RowValues],
) -> Result<ResultSet, SqlDaoError> {
    let mut conn = pool.get().await?;
    let stream = bind_query_params(query, params).query(&mut *conn).await?;
    build_result_set(stream).await
}

/// Execute a DML statement and return the total rows affected.
///
/// # Errors
/// Returns errors from pool checkout or execution.
pub async fn execute_dml(
    pool: &Pool<ConnectionManager>,
    query: &str,
    params: &[RowValues],
) -> Result<usize, SqlDaoError> {
    let mut conn = pool.get().await?;
    let result = bind_query_params(query, params).execute(&mut *conn).await?;
    usize::try_from(result.total()).map_err(|e| {
        SqlDaoError::ExecutionError(format!("mssql affected rows conversion error: {e}"))
    })
}

/// Run a rendered `EXEC` and collect the rows the procedure selects.
///
/// # Errors
/// Returns errors from pool checkout or execution.
pub async fn execute_call(
    pool: &Pool<ConnectionManager>,
    query: &str,
    params: &[ProcedureBinding],
) -> Result<ResultSet, SqlDaoError> {
    let mut conn = pool.get().await?;
    let stream = bind_procedure_params(query, params)
        .query(&mut *conn)
        .await?;
    build_result_set(stream).await
}

/// `@@VERSION`, e.g. `Microsoft SQL Server 2022 (RTM) - 16.0.1000.6 ...`.
///
/// # Errors
/// Returns errors from pool checkout or the version query.
pub async fn server_version(pool: &Pool<ConnectionManager>) -> Result<String, SqlDaoError> {
    let mut conn = pool.get().await?;
    let row = conn
        .simple_query("SELECT @@VERSION")
        .await?
        .into_row()
        .await?;
    row.and_then(|r| r.get::<&str, _>(0).map(str::to_string))
        .ok_or_else(|| SqlDaoError::ExecutionError("SELECT @@VERSION returned no row".to_string()))
}
