#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sql_dao::prelude::*;

/// One statement as the executor received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Select { sql: String, params: Vec<RowValues> },
    Dml { sql: String, params: Vec<RowValues> },
    Call { sql: String, params: Vec<ProcedureBinding> },
    ProductName,
}

/// In-memory executor that records statements and replays queued result sets.
#[derive(Clone)]
pub struct RecordingExecutor {
    style: PlaceholderStyle,
    syntax: CallSyntax,
    product: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
    results: Arc<Mutex<VecDeque<ResultSet>>>,
}

impl RecordingExecutor {
    pub fn new(style: PlaceholderStyle, syntax: CallSyntax) -> Self {
        Self {
            style,
            syntax,
            product: "Microsoft SQL Server 2022".to_string(),
            calls: Arc::default(),
            results: Arc::default(),
        }
    }

    pub fn with_product(mut self, product: &str) -> Self {
        self.product = product.to_string();
        self
    }

    /// Queue the result of the next `select` or `call`.
    pub fn push_result(&self, rs: ResultSet) {
        self.results.lock().unwrap().push_back(rs);
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    fn next_result(&self) -> ResultSet {
        self.results.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn record(&self, call: Recorded) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SqlExecutor for RecordingExecutor {
    fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    fn call_syntax(&self) -> CallSyntax {
        self.syntax
    }

    async fn select(&self, sql: &str, params: &[RowValues]) -> Result<ResultSet, SqlDaoError> {
        self.record(Recorded::Select {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        Ok(self.next_result())
    }

    async fn dml(&self, sql: &str, params: &[RowValues]) -> Result<usize, SqlDaoError> {
        self.record(Recorded::Dml {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        Ok(1)
    }

    async fn call(
        &self,
        sql: &str,
        params: &[ProcedureBinding],
    ) -> Result<ResultSet, SqlDaoError> {
        self.record(Recorded::Call {
            sql: sql.to_string(),
            params: params.to_vec(),
        });
        Ok(self.next_result())
    }

    async fn product_name(&self) -> Result<String, SqlDaoError> {
        self.record(Recorded::ProductName);
        if self.product.is_empty() {
            return Err(SqlDaoError::ConnectionError("no server".to_string()));
        }
        Ok(self.product.clone())
    }
}

/// A result set with the given columns and rows.
pub fn result_set(columns: &[&str], rows: Vec<Vec<RowValues>>) -> ResultSet {
    let mut rs = ResultSet::with_capacity(rows.len());
    rs.set_column_names(Arc::new(columns.iter().map(|c| (*c).to_string()).collect()));
    for row in rows {
        rs.add_row_values(row);
    }
    rs
}

pub fn count_result(total: i64) -> ResultSet {
    result_set(&["TOTAL"], vec![vec![RowValues::Int(total)]])
}

pub fn dao(executor: &RecordingExecutor, dialect: PagingDialect) -> SqlDao {
    SqlDao::builder()
        .executor(executor.clone())
        .dialect(dialect)
        .build()
        .expect("executor supplied")
}
