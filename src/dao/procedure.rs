use super::SqlDao;
use crate::criteria::ProcedureCriteria;
use crate::error::SqlDaoError;
use crate::executor::ProcedureBinding;
use crate::results::ResultSet;

impl SqlDao {
    /// Invoke a stored procedure, binding each argument once in declared order.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::InvalidArgument`] for a missing criteria or a blank procedure
    /// name, before any connection is taken. Otherwise whatever the executor reports.
    pub async fn execute_procedure(
        &self,
        criteria: Option<&ProcedureCriteria>,
    ) -> Result<ResultSet, SqlDaoError> {
        let criteria = criteria.ok_or_else(|| {
            SqlDaoError::InvalidArgument("procedure criteria is required".to_string())
        })?;
        if !criteria.has_name() {
            return Err(SqlDaoError::InvalidArgument(
                "procedure name is required".to_string(),
            ));
        }

        let sql = criteria.render_call(
            self.executor.call_syntax(),
            self.executor.placeholder_style(),
        );
        let bindings: Vec<ProcedureBinding> =
            criteria.params.iter().map(ProcedureBinding::from).collect();

        tracing::debug!(
            sql = %sql,
            signature = %criteria.call_signature(),
            params = ?bindings,
            "calling procedure"
        );

        self.executor.call(&sql, &bindings).await
    }
}
