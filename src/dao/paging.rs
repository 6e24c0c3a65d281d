use serde::de::DeserializeOwned;

use super::{SqlDao, log_statement};
use crate::criteria::{Criteria, Paging};
use crate::error::SqlDaoError;
use crate::pagination::{build_count_query, build_page_query};
use crate::params::Parameter;
use crate::results::{CustomDbRow, ResultSet};
use crate::types::RowValues;

fn count_value(value: &RowValues) -> Result<u64, SqlDaoError> {
    let count = match value {
        RowValues::Int(i) => u64::try_from(*i).ok(),
        RowValues::Float(f) if *f >= 0.0 && f.fract() == 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(*f as u64)
        }
        RowValues::Text(s) => s.trim().parse().ok(),
        RowValues::Null => Some(0),
        _ => None,
    };
    count.ok_or_else(|| SqlDaoError::ConversionError(format!("row count {value:?} is not a count")))
}

impl SqlDao {
    /// `SELECT COUNT(*)` over the statement. A count query that returns no row counts as 0.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when the count column is not numeric.
    pub async fn count_for_paging(&self, sql: &str, params: &Parameter) -> Result<u64, SqlDaoError> {
        let count_sql = build_count_query(sql);
        log_statement::<u64>(&count_sql, params);
        let rows = self.select_bound(&count_sql, params).await?;
        match rows.first().and_then(|row| row.get_by_index(0)) {
            Some(value) => count_value(value),
            None => Ok(0),
        }
    }

    /// One page of `T` plus the total row count and page metadata.
    ///
    /// The count query runs unless `criteria` carries a cached total with `skip_row_count`.
    /// Without criteria the statement runs unpaged and the result reports no pages.
    ///
    /// # Errors
    /// Returns parameter errors (including a caller-bound reserved paging name), conversion
    /// errors from mapping, or whatever the executor reports.
    pub async fn query_with_paging<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &Parameter,
        criteria: Option<&Criteria>,
    ) -> Result<Paging<T>, SqlDaoError> {
        self.query_with_paging_mapped(sql, params, criteria, CustomDbRow::to_bean)
            .await
    }

    /// [`SqlDao::query_with_paging`] with a row mapper instead of serde.
    ///
    /// # Errors
    /// See [`SqlDao::query_with_paging`].
    pub async fn query_with_paging_mapped<T, F>(
        &self,
        sql: &str,
        params: &Parameter,
        criteria: Option<&Criteria>,
        mapper: F,
    ) -> Result<Paging<T>, SqlDaoError>
    where
        F: Fn(&CustomDbRow) -> Result<T, SqlDaoError>,
    {
        let Some(criteria) = criteria else {
            log_statement::<T>(sql, params);
            let rows = self.select_bound(sql, params).await?;
            let items = rows.results.iter().map(mapper).collect::<Result<Vec<_>, _>>()?;
            let total = items.len() as u64;
            return Ok(Paging::new(items, total, None));
        };

        let total = match (criteria.skip_row_count, criteria.total_element) {
            (true, Some(cached)) => {
                tracing::debug!(total = cached, "reusing cached row count");
                cached
            }
            _ => self.count_for_paging(sql, params).await?,
        };

        let rows = self.page_rows::<T>(sql, params, criteria).await?;
        let items = rows.results.iter().map(mapper).collect::<Result<Vec<_>, _>>()?;

        let mut echoed = criteria.clone();
        echoed.total_element = Some(total);
        Ok(Paging::new(items, total, Some(echoed)))
    }

    /// Only the rows of the requested page, without counting.
    ///
    /// # Errors
    /// See [`SqlDao::query_with_paging`].
    pub async fn query_to_paging<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &Parameter,
        criteria: &Criteria,
    ) -> Result<Vec<T>, SqlDaoError> {
        let rows = self.page_rows::<T>(sql, params, criteria).await?;
        rows.results.iter().map(CustomDbRow::to_bean).collect()
    }

    /// The raw result set of the requested page, without counting.
    ///
    /// # Errors
    /// See [`SqlDao::query_with_paging`].
    pub async fn query_as_paging_result(
        &self,
        sql: &str,
        params: &Parameter,
        criteria: &Criteria,
    ) -> Result<ResultSet, SqlDaoError> {
        self.page_rows::<ResultSet>(sql, params, criteria).await
    }

    async fn page_rows<T>(
        &self,
        sql: &str,
        params: &Parameter,
        criteria: &Criteria,
    ) -> Result<ResultSet, SqlDaoError> {
        let (page_sql, page_params) = build_page_query(sql, criteria, params, self.dialect)?;
        log_statement::<T>(&page_sql, &page_params);
        self.select_bound(&page_sql, &page_params).await
    }
}
