//! Conversions from [`RowValues`] into Rust values and JSON.

use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

use crate::error::SqlDaoError;
use crate::types::RowValues;

/// A Rust type a single column value can be read into.
pub trait FromRowValue: Sized {
    /// # Errors
    /// Returns [`SqlDaoError::ConversionError`] when the value has the wrong shape.
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError>;
}

fn mismatch<T>(value: &RowValues) -> SqlDaoError {
    SqlDaoError::ConversionError(format!(
        "cannot read {value:?} as {}",
        std::any::type_name::<T>()
    ))
}

impl FromRowValue for i64 {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        match value {
            RowValues::Int(i) => Ok(*i),
            RowValues::Bool(b) => Ok(i64::from(*b)),
            RowValues::Text(s) => s.trim().parse().map_err(|_| mismatch::<i64>(value)),
            _ => Err(mismatch::<i64>(value)),
        }
    }
}

impl FromRowValue for i32 {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        let wide = i64::from_row_value(value)?;
        i32::try_from(wide).map_err(|_| mismatch::<i32>(value))
    }
}

impl FromRowValue for u64 {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        let wide = i64::from_row_value(value)?;
        u64::try_from(wide).map_err(|_| mismatch::<u64>(value))
    }
}

impl FromRowValue for f64 {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        match value {
            RowValues::Text(s) => s.trim().parse().map_err(|_| mismatch::<f64>(value)),
            other => other.as_float().ok_or_else(|| mismatch::<f64>(value)),
        }
    }
}

impl FromRowValue for bool {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        value.as_bool().copied().ok_or_else(|| mismatch::<bool>(value))
    }
}

impl FromRowValue for String {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        match value {
            RowValues::Text(s) => Ok(s.clone()),
            RowValues::Int(i) => Ok(i.to_string()),
            RowValues::Float(f) => Ok(f.to_string()),
            RowValues::Bool(b) => Ok(b.to_string()),
            RowValues::Timestamp(ts) => Ok(ts.format("%F %T%.f").to_string()),
            RowValues::JSON(json) => Ok(json.to_string()),
            RowValues::Null | RowValues::Blob(_) => Err(mismatch::<String>(value)),
        }
    }
}

impl FromRowValue for NaiveDateTime {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        value
            .as_timestamp()
            .ok_or_else(|| mismatch::<NaiveDateTime>(value))
    }
}

impl FromRowValue for JsonValue {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        match value {
            RowValues::JSON(json) => Ok(json.clone()),
            RowValues::Text(s) => serde_json::from_str(s).map_err(|_| mismatch::<JsonValue>(value)),
            other => Ok(row_value_to_json(other)),
        }
    }
}

impl FromRowValue for Vec<u8> {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        match value {
            RowValues::Blob(bytes) => Ok(bytes.clone()),
            RowValues::Text(s) => Ok(s.as_bytes().to_vec()),
            _ => Err(mismatch::<Vec<u8>>(value)),
        }
    }
}

impl FromRowValue for RowValues {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        Ok(value.clone())
    }
}

impl<T: FromRowValue> FromRowValue for Option<T> {
    fn from_row_value(value: &RowValues) -> Result<Self, SqlDaoError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_row_value(value).map(Some)
        }
    }
}

/// JSON form used for bean mapping. Timestamps become ISO-8601 text, blobs byte arrays.
#[must_use]
pub fn row_value_to_json(value: &RowValues) -> JsonValue {
    match value {
        RowValues::Int(i) => JsonValue::from(*i),
        RowValues::Float(f) => JsonValue::from(*f),
        RowValues::Text(s) => JsonValue::String(s.clone()),
        RowValues::Bool(b) => JsonValue::Bool(*b),
        RowValues::Timestamp(ts) => JsonValue::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        RowValues::Null => JsonValue::Null,
        RowValues::JSON(json) => json.clone(),
        RowValues::Blob(bytes) => JsonValue::from(bytes.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn numbers_widen_and_narrow() {
        assert_eq!(i32::from_row_value(&RowValues::Int(42)).unwrap(), 42);
        assert!(i32::from_row_value(&RowValues::Int(i64::MAX)).is_err());
        assert!(u64::from_row_value(&RowValues::Int(-1)).is_err());
        assert_eq!(f64::from_row_value(&RowValues::Int(3)).unwrap(), 3.0);
        assert_eq!(f64::from_row_value(&RowValues::Text("2.5".into())).unwrap(), 2.5);
    }

    #[test]
    fn null_needs_an_option() {
        assert!(i64::from_row_value(&RowValues::Null).is_err());
        assert_eq!(Option::<i64>::from_row_value(&RowValues::Null).unwrap(), None);
        assert_eq!(
            Option::<String>::from_row_value(&RowValues::Text("x".into())).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn timestamps_render_as_iso_text() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(
            row_value_to_json(&RowValues::Timestamp(ts)),
            JsonValue::String("2024-03-01T12:30:00".into())
        );
        assert_eq!(
            NaiveDateTime::from_row_value(&RowValues::Text("2024-03-01 12:30:00".into())).unwrap(),
            ts
        );
    }

    #[test]
    fn json_text_is_parsed() {
        let json = JsonValue::from_row_value(&RowValues::Text(r#"{"a":1}"#.into())).unwrap();
        assert_eq!(json["a"], 1);
    }
}
