use deadpool_sqlite::Pool;

use crate::error::SqlDaoError;
use crate::results::ResultSet;
use crate::types::RowValues;

use super::params::Params;
use super::query::build_result_set;

/// Execute a SELECT query in `SQLite`.
///
/// # Errors
///
/// Returns `SqlDaoError` if a connection cannot be checked out or the statement fails.
pub async fn execute_select(
    pool: &Pool,
    query: &str,
    params: &[RowValues],
) -> Result<ResultSet, SqlDaoError> {
    let conn = pool.get().await?;
    let sql_owned = query.to_owned();
    let params_owned = Params::convert(params).0;
    conn.interact(move |conn| {
        let mut stmt = conn.prepare(&sql_owned)?;
        let result = build_result_set(&mut stmt, &params_owned);
        finalize(stmt);
        result
    })
    .await?
}

/// Execute a DML query (INSERT, UPDATE, DELETE) in `SQLite`.
///
/// # Errors
///
/// Returns `SqlDaoError` if execution fails or rows affected cannot be converted.
pub async fn execute_dml(
    pool: &Pool,
    query: &str,
    params: &[RowValues],
) -> Result<usize, SqlDaoError> {
    let conn = pool.get().await?;
    let sql_owned = query.to_owned();
    let params_owned = Params::convert(params);
    conn.interact(move |conn| {
        let mut stmt = conn.prepare(&sql_owned)?;
        let affected = stmt.execute(&params_owned.as_refs()[..]);
        finalize(stmt);
        Ok::<_, SqlDaoError>(affected?)
    })
    .await?
}

/// `SQLite` library version, e.g. `3.45.0`.
///
/// # Errors
/// Returns `SqlDaoError` if the connection cannot be checked out.
pub async fn sqlite_version(pool: &Pool) -> Result<String, SqlDaoError> {
    let conn = pool.get().await?;
    let version = conn
        .interact(|conn| conn.query_row("SELECT sqlite_version()", [], |row| row.get::<_, String>(0)))
        .await??;
    Ok(version)
}

fn finalize(stmt: rusqlite::Statement<'_>) {
    if let Err(e) = stmt.finalize() {
        tracing::warn!(error = %e, "failed to finalize sqlite statement");
    }
}
