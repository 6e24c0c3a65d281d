use chrono::NaiveDateTime;
use tiberius::Query;

use crate::executor::ProcedureBinding;
use crate::sql_types::SqlTypes;
use crate::types::RowValues;

fn bind_value(query: &mut Query<'_>, param: &RowValues) {
    match param {
        RowValues::Int(i) => query.bind(*i),
        RowValues::Float(f) => query.bind(*f),
        RowValues::Text(s) => query.bind(s.clone()),
        RowValues::Bool(b) => query.bind(*b),
        RowValues::Timestamp(dt) => query.bind(*dt),
        RowValues::Null => query.bind(Option::<String>::None),
        RowValues::JSON(jsval) => query.bind(jsval.to_string()),
        RowValues::Blob(bytes) => query.bind(bytes.clone()),
    }
}

/// A query with every parameter bound in order.
pub fn bind_query_params<'a>(sql: &'a str, params: &[RowValues]) -> Query<'a> {
    let mut query = Query::new(sql);
    for param in params {
        bind_value(&mut query, param);
    }
    query
}

/// A procedure call with each argument bound once; NULLs carry the declared SQL type.
pub fn bind_procedure_params<'a>(sql: &'a str, params: &[ProcedureBinding]) -> Query<'a> {
    let mut query = Query::new(sql);
    for param in params {
        if param.is_typed_null() {
            bind_typed_null(&mut query, param.sql_type);
        } else {
            bind_value(&mut query, &param.value);
        }
    }
    query
}

/// Rust type a NULL is bound as, so the server sees the declared parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NullKind {
    Int,
    Float,
    DateTime,
    Binary,
    Text,
}

/// Untyped and vendor-specific codes fall back to text.
pub(crate) fn null_kind(sql_type: SqlTypes) -> NullKind {
    match sql_type {
        t if t.is_textual() => NullKind::Text,
        SqlTypes::Integer => NullKind::Int,
        SqlTypes::Numeric | SqlTypes::Decimal => NullKind::Float,
        SqlTypes::Date | SqlTypes::Timestamp => NullKind::DateTime,
        SqlTypes::Blob => NullKind::Binary,
        _ => NullKind::Text,
    }
}

fn bind_typed_null(query: &mut Query<'_>, sql_type: SqlTypes) {
    match null_kind(sql_type) {
        NullKind::Int => query.bind(Option::<i64>::None),
        NullKind::Float => query.bind(Option::<f64>::None),
        NullKind::DateTime => query.bind(Option::<NaiveDateTime>::None),
        NullKind::Binary => query.bind(Option::<Vec<u8>>::None),
        NullKind::Text => query.bind(Option::<String>::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_types_bind_null_as_text() {
        for t in [SqlTypes::Varchar, SqlTypes::Char, SqlTypes::Clob] {
            assert_eq!(null_kind(t), NullKind::Text, "{t:?}");
        }
    }

    #[test]
    fn null_kind_follows_the_declared_type() {
        assert_eq!(null_kind(SqlTypes::Integer), NullKind::Int);
        assert_eq!(null_kind(SqlTypes::Numeric), NullKind::Float);
        assert_eq!(null_kind(SqlTypes::Decimal), NullKind::Float);
        assert_eq!(null_kind(SqlTypes::Date), NullKind::DateTime);
        assert_eq!(null_kind(SqlTypes::Timestamp), NullKind::DateTime);
        assert_eq!(null_kind(SqlTypes::Blob), NullKind::Binary);
    }

    #[test]
    fn untyped_codes_bind_null_as_text() {
        for t in [SqlTypes::Null, SqlTypes::Other, SqlTypes::Cursor] {
            assert_eq!(null_kind(t), NullKind::Text, "{t:?}");
        }
    }
}
