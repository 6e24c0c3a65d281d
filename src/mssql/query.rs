use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use futures_util::TryStreamExt;
use tiberius::{ColumnData, FromSql, QueryStream};

use crate::error::SqlDaoError;
use crate::results::ResultSet;
use crate::types::RowValues;

/// Drain a query stream into a result set. Rows from later result sets are appended under
/// the first set's column names. A stream with no result set yields an empty `ResultSet`.
///
/// # Errors
/// Returns the tiberius error if reading the stream fails or a value cannot be decoded.
pub async fn build_result_set(mut stream: QueryStream<'_>) -> Result<ResultSet, SqlDaoError> {
    let column_names: Vec<String> = stream
        .columns()
        .await?
        .map(|cols| cols.iter().map(|col| col.name().to_string()).collect())
        .unwrap_or_default();

    let mut result_set = ResultSet::with_capacity(10);
    result_set.set_column_names(Arc::new(column_names));

    let mut rows = stream.into_row_stream();
    while let Some(row) = rows.try_next().await? {
        let row_values = row
            .into_iter()
            .map(|data| column_value(&data))
            .collect::<Result<Vec<_>, _>>()?;
        result_set.add_row_values(row_values);
    }

    Ok(result_set)
}

/// Convert one SQL Server cell.
///
/// # Errors
/// Returns [`SqlDaoError::ConversionError`] for column types with no `RowValues` form.
pub fn column_value(data: &ColumnData<'static>) -> Result<RowValues, SqlDaoError> {
    let value = match data {
        ColumnData::U8(v) => v.map(|v| RowValues::Int(i64::from(v))),
        ColumnData::I16(v) => v.map(|v| RowValues::Int(i64::from(v))),
        ColumnData::I32(v) => v.map(|v| RowValues::Int(i64::from(v))),
        ColumnData::I64(v) => v.map(RowValues::Int),
        ColumnData::F32(v) => v.map(|v| RowValues::Float(f64::from(v))),
        ColumnData::F64(v) => v.map(RowValues::Float),
        ColumnData::Bit(v) => v.map(RowValues::Bool),
        ColumnData::String(v) => v.as_ref().map(|s| RowValues::Text(s.to_string())),
        ColumnData::Guid(v) => v.map(|g| RowValues::Text(g.to_string())),
        ColumnData::Binary(v) => v.as_ref().map(|b| RowValues::Blob(b.to_vec())),
        ColumnData::Numeric(v) => v.map(|n| RowValues::Float(f64::from(n))),
        ColumnData::DateTime(_) | ColumnData::SmallDateTime(_) | ColumnData::DateTime2(_) => {
            NaiveDateTime::from_sql(data)?.map(RowValues::Timestamp)
        }
        ColumnData::DateTimeOffset(_) => {
            DateTime::<Utc>::from_sql(data)?.map(|dt| RowValues::Timestamp(dt.naive_utc()))
        }
        ColumnData::Date(_) => NaiveDate::from_sql(data)?
            .map(|d| RowValues::Timestamp(d.and_time(NaiveTime::MIN))),
        ColumnData::Time(_) => NaiveTime::from_sql(data)?.map(|t| RowValues::Text(t.to_string())),
        other => {
            return Err(SqlDaoError::ConversionError(format!(
                "unsupported SQL Server column value {other:?}"
            )));
        }
    };
    Ok(value.unwrap_or(RowValues::Null))
}
