use serde::{Deserialize, Serialize};

/// Symbolic SQL type tags for procedure parameters, carrying the vendor-neutral
/// (JDBC `java.sql.Types`) code. `Cursor` uses the Oracle driver's sentinel `-10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlTypes {
    Varchar,
    Char,
    Numeric,
    Decimal,
    Integer,
    Date,
    Timestamp,
    Blob,
    Clob,
    Null,
    Other,
    Cursor,
}

impl SqlTypes {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            SqlTypes::Varchar => 12,
            SqlTypes::Char => 1,
            SqlTypes::Numeric => 2,
            SqlTypes::Decimal => 3,
            SqlTypes::Integer => 4,
            SqlTypes::Date => 91,
            SqlTypes::Timestamp => 93,
            SqlTypes::Blob => 2004,
            SqlTypes::Clob => 2005,
            SqlTypes::Null => 0,
            SqlTypes::Other => 1111,
            SqlTypes::Cursor => -10,
        }
    }

    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        [
            SqlTypes::Varchar,
            SqlTypes::Char,
            SqlTypes::Numeric,
            SqlTypes::Decimal,
            SqlTypes::Integer,
            SqlTypes::Date,
            SqlTypes::Timestamp,
            SqlTypes::Blob,
            SqlTypes::Clob,
            SqlTypes::Null,
            SqlTypes::Other,
            SqlTypes::Cursor,
        ]
        .into_iter()
        .find(|t| t.code() == code)
    }

    /// Character-like types that bind a NULL as text.
    #[must_use]
    pub fn is_textual(self) -> bool {
        matches!(self, SqlTypes::Varchar | SqlTypes::Char | SqlTypes::Clob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_character_types_are_textual() {
        assert!(SqlTypes::Varchar.is_textual());
        assert!(SqlTypes::Clob.is_textual());
        assert!(!SqlTypes::Integer.is_textual());
        assert!(!SqlTypes::Null.is_textual());
    }

    #[test]
    fn cursor_sits_outside_the_standard_range() {
        assert!(SqlTypes::Cursor.code() < 0);
        assert_eq!(SqlTypes::from_code(-10), Some(SqlTypes::Cursor));
    }

    #[test]
    fn codes_are_unique() {
        for code in [12, 1, 2, 3, 4, 91, 93, 2004, 2005, 0, 1111, -10] {
            assert_eq!(SqlTypes::from_code(code).map(SqlTypes::code), Some(code));
        }
        assert_eq!(SqlTypes::from_code(42), None);
    }
}
