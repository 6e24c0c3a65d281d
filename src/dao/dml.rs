use super::{SqlDao, log_statement};
use crate::error::SqlDaoError;
use crate::params::Parameter;
use crate::types::RowValues;

impl SqlDao {
    /// Run an INSERT, UPDATE, DELETE, or DDL statement and return the affected row count.
    ///
    /// # Errors
    /// Returns parameter errors from binding, or whatever the executor reports.
    pub async fn execute(&self, sql: &str, params: &Parameter) -> Result<usize, SqlDaoError> {
        log_statement::<usize>(sql, params);
        let bound = self.bind(sql, params)?;
        self.executor.dml(&bound.sql, &bound.values).await
    }

    /// [`SqlDao::execute`] with positional values.
    ///
    /// # Errors
    /// See [`SqlDao::execute`].
    pub async fn execute_values(
        &self,
        sql: &str,
        values: &[RowValues],
    ) -> Result<usize, SqlDaoError> {
        self.execute(sql, &Parameter::from(values.to_vec())).await
    }
}
