//! Vendor paging rewrites.
//!
//! Each dialect appends (or wraps with) a page-bounding clause and pushes the matching bind
//! values onto the statement's parameters. Positional statements get `?` markers and values
//! in clause order, or `?N` markers continuing the statement's own numbering when it already
//! uses numbered markers; named statements get reserved `:P_*` names.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::criteria::Criteria;
use crate::error::SqlDaoError;
use crate::params::Parameter;
use crate::sorting::append_order_by;
use crate::translation::highest_numbered_marker;
use crate::types::RowValues;
use crate::vendor::Vendor;

pub const P_ROW_START: &str = "P_ROW_START";
pub const P_ROW_TOTAL: &str = "P_ROW_TOTAL";
pub const P_PAGE_ROW_NUM: &str = "P_PAGE_ROW_NUM";

/// Rewrites a statement so it returns a single page.
pub trait PaginationStrategy {
    /// Bound `sql` to the page `criteria` describes, adding bind values to `params`.
    /// Leaves both untouched when paging is inactive.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ParameterError`] when a reserved name is already bound, or
    /// [`SqlDaoError::InvalidArgument`] when the offsets do not fit a 64-bit signed integer.
    fn rewrite(
        &self,
        sql: &mut String,
        criteria: &Criteria,
        params: &mut Parameter,
    ) -> Result<(), SqlDaoError>;
}

/// `OFFSET ? ROWS FETCH NEXT ? ROWS ONLY` (SQL Server 2012+, Oracle 12c+, Postgres).
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetFetch;

/// `LIMIT ? OFFSET ?` (MySQL, MariaDB, SQLite, Postgres).
#[derive(Debug, Clone, Copy, Default)]
pub struct LimitOffset;

/// `ROWNUM` window over a wrapped query (Oracle before 12c).
#[derive(Debug, Clone, Copy, Default)]
pub struct RowNum;

fn bind_value(n: u64) -> Result<RowValues, SqlDaoError> {
    i64::try_from(n)
        .map(RowValues::Int)
        .map_err(|_| SqlDaoError::InvalidArgument(format!("page offset {n} is out of range")))
}

/// Push `binds` positionally or under their reserved names, then append the matching
/// marker text produced by `clause`.
fn push_binds(
    sql: &mut String,
    params: &mut Parameter,
    binds: [(&str, u64); 2],
    clause: impl Fn(&str, &str) -> String,
) -> Result<(), SqlDaoError> {
    let [(first_name, first), (second_name, second)] = binds;
    match params {
        Parameter::Indexed(inx) => {
            inx.add(bind_value(first)?).add(bind_value(second)?);
            let last = highest_numbered_marker(sql);
            if last > 0 {
                sql.push_str(&clause(&format!("?{}", last + 1), &format!("?{}", last + 2)));
            } else {
                sql.push_str(&clause("?", "?"));
            }
        }
        Parameter::Named(name) => {
            name.add_reserved(first_name, bind_value(first)?)?;
            name.add_reserved(second_name, bind_value(second)?)?;
            sql.push_str(&clause(&format!(":{first_name}"), &format!(":{second_name}")));
        }
    }
    Ok(())
}

fn window(criteria: &Criteria) -> Option<(u64, u64)> {
    Some((criteria.row_start()?, u64::from(criteria.size?)))
}

impl PaginationStrategy for OffsetFetch {
    fn rewrite(
        &self,
        sql: &mut String,
        criteria: &Criteria,
        params: &mut Parameter,
    ) -> Result<(), SqlDaoError> {
        let Some((start, size)) = window(criteria) else {
            return Ok(());
        };
        push_binds(
            sql,
            params,
            [(P_ROW_START, start), (P_ROW_TOTAL, size)],
            |offset, fetch| format!(" OFFSET {offset} ROWS FETCH NEXT {fetch} ROWS ONLY"),
        )
    }
}

impl PaginationStrategy for LimitOffset {
    fn rewrite(
        &self,
        sql: &mut String,
        criteria: &Criteria,
        params: &mut Parameter,
    ) -> Result<(), SqlDaoError> {
        let Some((start, size)) = window(criteria) else {
            return Ok(());
        };
        push_binds(
            sql,
            params,
            [(P_ROW_TOTAL, size), (P_ROW_START, start)],
            |limit, offset| format!(" LIMIT {limit} OFFSET {offset}"),
        )
    }
}

impl PaginationStrategy for RowNum {
    fn rewrite(
        &self,
        sql: &mut String,
        criteria: &Criteria,
        params: &mut Parameter,
    ) -> Result<(), SqlDaoError> {
        let Some((start, size)) = window(criteria) else {
            return Ok(());
        };
        let inner = std::mem::take(sql);
        sql.push_str("SELECT T.* FROM (SELECT ROWNUM AS PAGE_ROW_NUM, T.* FROM (");
        sql.push_str(&inner);
        sql.push_str(") T) T");
        push_binds(
            sql,
            params,
            [(P_ROW_START, start), (P_PAGE_ROW_NUM, start + size)],
            |lower, upper| {
                format!(" WHERE T.PAGE_ROW_NUM > {lower} AND T.PAGE_ROW_NUM <= {upper}")
            },
        )
    }
}

/// Which paging clause a [`crate::dao::SqlDao`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingDialect {
    #[default]
    OffsetFetch,
    LimitOffset,
    RowNum,
}

impl PagingDialect {
    #[must_use]
    pub fn strategy(self) -> &'static dyn PaginationStrategy {
        match self {
            PagingDialect::OffsetFetch => &OffsetFetch,
            PagingDialect::LimitOffset => &LimitOffset,
            PagingDialect::RowNum => &RowNum,
        }
    }

    /// Suggested dialect for a detected vendor; `None` when the vendor is unknown.
    #[must_use]
    pub fn for_vendor(vendor: &Vendor) -> Option<Self> {
        match vendor {
            Vendor::Oracle => Some(PagingDialect::RowNum),
            Vendor::MsSql => Some(PagingDialect::OffsetFetch),
            Vendor::MySql | Vendor::Postgres | Vendor::Sqlite => Some(PagingDialect::LimitOffset),
            Vendor::Other(_) => None,
        }
    }
}

/// `SELECT * FROM (<sql>) TB [ORDER BY ...] <paging>` with a copy of `params` carrying the
/// paging binds. The caller's parameters are left as they were.
///
/// # Errors
/// See [`PaginationStrategy::rewrite`].
pub fn build_page_query(
    sql: &str,
    criteria: &Criteria,
    params: &Parameter,
    dialect: PagingDialect,
) -> Result<(String, Parameter), SqlDaoError> {
    let mut page_sql = format!("SELECT * FROM ({sql}) TB");
    append_order_by(&mut page_sql, &criteria.sorts);

    let mut page_params = params.clone();
    dialect
        .strategy()
        .rewrite(&mut page_sql, criteria, &mut page_params)?;
    Ok((page_sql, page_params))
}

#[must_use]
pub fn build_count_query(sql: &str) -> String {
    format!("SELECT COUNT(*) AS TOTAL FROM ({sql}) TB")
}
