use serde::de::DeserializeOwned;

use super::{SqlDao, log_statement};
use crate::error::SqlDaoError;
use crate::mapping::FromRowValue;
use crate::params::Parameter;
use crate::results::{CustomDbRow, ResultSet};

impl SqlDao {
    /// Run a row-returning statement and hand back the raw result set.
    ///
    /// # Errors
    /// Returns parameter errors from binding, or whatever the executor reports.
    pub async fn query_to_result_set(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<ResultSet, SqlDaoError> {
        log_statement::<ResultSet>(sql, params);
        let bound = self.bind(sql, params)?;
        self.executor.select(&bound.sql, &bound.values).await
    }

    /// Every row deserialized into `T` by lower-cased column name.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when a row does not fit `T`.
    pub async fn query_to_list<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<Vec<T>, SqlDaoError> {
        log_statement::<T>(sql, params);
        let rows = self.select_bound(sql, params).await?;
        rows.results.iter().map(CustomDbRow::to_bean).collect()
    }

    /// Every row converted by `mapper`.
    ///
    /// # Errors
    /// Returns the first error `mapper` reports.
    pub async fn query_to_list_with<T, F>(
        &self,
        sql: &str,
        params: &Parameter,
        mapper: F,
    ) -> Result<Vec<T>, SqlDaoError>
    where
        F: Fn(&CustomDbRow) -> Result<T, SqlDaoError>,
    {
        log_statement::<T>(sql, params);
        let rows = self.select_bound(sql, params).await?;
        rows.results.iter().map(mapper).collect()
    }

    /// The first row as `T`, or `None` when nothing matched.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when the row does not fit `T`.
    pub async fn query_to_bean<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<Option<T>, SqlDaoError> {
        log_statement::<T>(sql, params);
        let rows = self.select_bound(sql, params).await?;
        rows.first().map(CustomDbRow::to_bean).transpose()
    }

    /// The first column of the first row.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when the value does not convert to `T`.
    pub async fn query_to_object<T: FromRowValue>(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<Option<T>, SqlDaoError> {
        log_statement::<T>(sql, params);
        let rows = self.select_bound(sql, params).await?;
        rows.first()
            .and_then(|row| row.get_by_index(0))
            .map(T::from_row_value)
            .transpose()
    }

    /// The first row converted by `mapper`.
    ///
    /// # Errors
    /// Returns the error `mapper` reports.
    pub async fn query_for_object_with<T, F>(
        &self,
        sql: &str,
        params: &Parameter,
        mapper: F,
    ) -> Result<Option<T>, SqlDaoError>
    where
        F: FnOnce(&CustomDbRow) -> Result<T, SqlDaoError>,
    {
        log_statement::<T>(sql, params);
        let rows = self.select_bound(sql, params).await?;
        rows.first().map(mapper).transpose()
    }

    /// Hand the whole result set to `extractor`.
    ///
    /// # Errors
    /// Returns the error `extractor` reports.
    pub async fn query<T, F>(
        &self,
        sql: &str,
        params: &Parameter,
        extractor: F,
    ) -> Result<T, SqlDaoError>
    where
        F: FnOnce(ResultSet) -> Result<T, SqlDaoError>,
    {
        log_statement::<T>(sql, params);
        extractor(self.select_bound(sql, params).await?)
    }

    /// The first column of the first row as a number; `None` when no row or a NULL comes back.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] for a non-numeric value.
    pub async fn query_to_number(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<Option<f64>, SqlDaoError> {
        Ok(self.query_to_object::<Option<f64>>(sql, params).await?.flatten())
    }

    pub(crate) async fn select_bound(
        &self,
        sql: &str,
        params: &Parameter,
    ) -> Result<ResultSet, SqlDaoError> {
        let bound = self.bind(sql, params)?;
        self.executor.select(&bound.sql, &bound.values).await
    }
}
