//! The execution seam between the DAO layer and a database driver.

use async_trait::async_trait;

use crate::criteria::{ProcedureDirection, ProcedureParam};
use crate::error::SqlDaoError;
use crate::results::ResultSet;
use crate::sql_types::SqlTypes;
use crate::translation::PlaceholderStyle;
use crate::types::RowValues;

/// Native stored-procedure invocation syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSyntax {
    /// `{ call name(?, ?) }`
    JdbcEscape,
    /// `CALL name($1, $2)`
    Call,
    /// `EXEC name @P1, @P2`
    Exec,
}

/// A procedure argument as handed to an executor: bound once, in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureBinding {
    pub value: RowValues,
    pub sql_type: SqlTypes,
    pub direction: ProcedureDirection,
}

impl ProcedureBinding {
    /// True when the value is NULL and must be bound as a NULL of `sql_type`.
    #[must_use]
    pub fn is_typed_null(&self) -> bool {
        self.value.is_null()
    }
}

impl From<&ProcedureParam> for ProcedureBinding {
    fn from(param: &ProcedureParam) -> Self {
        Self {
            value: param.value.clone(),
            sql_type: param.sql_type,
            direction: param.direction,
        }
    }
}

/// Runs fully-rendered statements against one database.
///
/// Statements arrive with markers already in [`SqlExecutor::placeholder_style`] and values in
/// bind order. Implementations acquire a connection per call and release it before returning.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    fn placeholder_style(&self) -> PlaceholderStyle;

    fn call_syntax(&self) -> CallSyntax;

    /// Run a row-returning statement.
    async fn select(&self, sql: &str, params: &[RowValues]) -> Result<ResultSet, SqlDaoError>;

    /// Run a statement and report the affected row count.
    async fn dml(&self, sql: &str, params: &[RowValues]) -> Result<usize, SqlDaoError>;

    /// Invoke a rendered procedure call.
    async fn call(
        &self,
        sql: &str,
        params: &[ProcedureBinding],
    ) -> Result<ResultSet, SqlDaoError>;

    /// Product name as the server reports it, used for vendor detection.
    async fn product_name(&self) -> Result<String, SqlDaoError>;
}
