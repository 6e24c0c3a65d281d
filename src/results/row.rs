use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::error::SqlDaoError;
use crate::mapping::{FromRowValue, row_value_to_json};
use crate::types::RowValues;

/// A row from a database query result
///
/// Column lookups by name ignore ASCII case, so `get("ID")`, `get("id")` and `get("Id")`
/// find the same column regardless of how the backend reports it.
#[derive(Debug, Clone)]
pub struct CustomDbRow {
    /// The column names for this row (shared across all rows in a result set)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row
    pub rows: Vec<RowValues>,
    // lower-cased name -> first index with that name
    #[doc(hidden)]
    pub(crate) column_index_cache: Arc<HashMap<String, usize>>,
}

pub(crate) fn build_index(column_names: &[String]) -> Arc<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(column_names.len());
    for (i, name) in column_names.iter().enumerate() {
        index.entry(name.to_ascii_lowercase()).or_insert(i);
    }
    Arc::new(index)
}

impl CustomDbRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, rows: Vec<RowValues>) -> Self {
        let cache = build_index(&column_names);
        Self {
            column_names,
            rows,
            column_index_cache: cache,
        }
    }

    /// Index of the first column whose name matches, ignoring case.
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        if let Some(&idx) = self.column_index_cache.get(column_name) {
            return Some(idx);
        }
        self.column_index_cache
            .get(&column_name.to_ascii_lowercase())
            .copied()
    }

    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.rows.get(idx))
    }

    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.rows.get(index)
    }

    /// Convert a named column into a Rust value.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when the column is missing or its value does
    /// not convert to `T`.
    pub fn get_as<T: FromRowValue>(&self, column_name: &str) -> Result<T, SqlDaoError> {
        let value = self.get(column_name).ok_or_else(|| {
            SqlDaoError::ConversionError(format!("no column named {column_name}"))
        })?;
        T::from_row_value(value)
    }

    /// The row as a JSON object keyed by lower-cased column names.
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut object = Map::with_capacity(self.rows.len());
        for (name, value) in self.column_names.iter().zip(&self.rows) {
            object
                .entry(name.to_ascii_lowercase())
                .or_insert_with(|| row_value_to_json(value));
        }
        JsonValue::Object(object)
    }

    /// Deserialize the row into `T`, matching lower-cased column names to field names.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when serde rejects the row.
    pub fn to_bean<T: DeserializeOwned>(&self) -> Result<T, SqlDaoError> {
        serde_json::from_value(self.to_json()).map_err(|e| {
            SqlDaoError::ConversionError(format!(
                "row does not map to {}: {e}",
                std::any::type_name::<T>()
            ))
        })
    }
}
