//! Bind-marker translation.
//!
//! Statements are written JDBC-style: bare `?` (or numbered `?N`/`$N`) for positional
//! values, `:name` for named ones. Before execution the markers are rewritten into the backend's native style and
//! named values are flattened into bind order.

use std::borrow::Cow;

mod parsers;
mod scanner;

pub(crate) use scanner::{Segment, segments};

use crate::error::SqlDaoError;
use crate::params::{NameParameter, Parameter};
use crate::types::RowValues;

/// Native bind-marker style of a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// Bare `?` (JDBC, MySQL).
    Question,
    /// `?1`, `?2`, ... (SQLite).
    Numbered,
    /// `$1`, `$2`, ... (PostgreSQL).
    Dollar,
    /// `@P1`, `@P2`, ... (SQL Server).
    AtP,
}

impl PlaceholderStyle {
    /// Marker for the 1-based bind position `index`.
    #[must_use]
    pub fn marker(self, index: usize) -> String {
        match self {
            PlaceholderStyle::Question => "?".to_string(),
            PlaceholderStyle::Numbered => format!("?{index}"),
            PlaceholderStyle::Dollar => format!("${index}"),
            PlaceholderStyle::AtP => format!("@P{index}"),
        }
    }
}

/// A statement in native marker style with its values in bind order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement<'a> {
    pub sql: Cow<'a, str>,
    pub values: Vec<RowValues>,
}

/// Rewrite `sql` and flatten `params` for a backend using `style`.
///
/// Positional statements use either bare `?` markers or numbered ones (`?N`, `$N`), not
/// both. Numbered markers may repeat and are rewritten into `style`.
///
/// # Errors
/// Returns [`SqlDaoError::ParameterError`] when a named marker has no value, when a named
/// statement contains a positional marker, when bare and numbered markers are mixed, or
/// when the markers do not account for exactly the supplied positional values.
pub fn bind_statement<'a>(
    sql: &'a str,
    params: &Parameter,
    style: PlaceholderStyle,
) -> Result<BoundStatement<'a>, SqlDaoError> {
    match params {
        Parameter::Indexed(inx) => {
            let parts = segments(sql);
            let bare = parts
                .iter()
                .filter(|s| matches!(s, Segment::Positional))
                .count();
            let highest = highest_index(&parts);

            if parts.contains(&Segment::Numbered(0)) {
                return Err(SqlDaoError::ParameterError(
                    "numbered markers start at 1".to_string(),
                ));
            }
            if bare > 0 && highest > 0 {
                return Err(SqlDaoError::ParameterError(
                    "statement mixes bare ? markers with numbered markers".to_string(),
                ));
            }
            if highest > 0 && highest != inx.len() {
                return Err(SqlDaoError::ParameterError(format!(
                    "statement references up to marker {highest} but {} values were supplied",
                    inx.len()
                )));
            }
            if bare > 0 && bare != inx.len() {
                return Err(SqlDaoError::ParameterError(format!(
                    "statement has {bare} positional markers but {} values were supplied",
                    inx.len()
                )));
            }

            // bare `?` cannot refer back to a position, so numbered values are laid out
            // in marker order
            let values = if highest > 0 && style == PlaceholderStyle::Question {
                parts
                    .iter()
                    .filter_map(|s| match s {
                        Segment::Numbered(i) => inx.as_slice().get(i - 1).cloned(),
                        _ => None,
                    })
                    .collect()
            } else {
                inx.to_array_parameter()
            };

            Ok(BoundStatement {
                sql: number_positional(sql, style),
                values,
            })
        }
        Parameter::Named(name) => {
            let (sql, values) = expand_named(sql, name, style)?;
            Ok(BoundStatement {
                sql: Cow::Owned(sql),
                values,
            })
        }
    }
}

fn highest_index(parts: &[Segment<'_>]) -> usize {
    parts
        .iter()
        .filter_map(|s| match s {
            Segment::Numbered(i) => Some(*i),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Highest numbered marker (`?N` or `$N`) outside quotes and comments; 0 when there is none.
#[must_use]
pub fn highest_numbered_marker(sql: &str) -> usize {
    highest_index(&segments(sql))
}

/// Number bare `?` markers for styles that need explicit positions, and rewrite numbered
/// markers into `style`.
///
/// Returns a borrowed `Cow` when nothing changes.
#[must_use]
pub fn number_positional(sql: &str, style: PlaceholderStyle) -> Cow<'_, str> {
    let parts = segments(sql);
    let has_bare = parts.iter().any(|s| matches!(s, Segment::Positional));
    let has_numbered = parts.iter().any(|s| matches!(s, Segment::Numbered(_)));
    if !has_numbered && (!has_bare || style == PlaceholderStyle::Question) {
        return Cow::Borrowed(sql);
    }

    let mut out = String::with_capacity(sql.len() + parts.len() * 2);
    let mut position = 0;
    for part in parts {
        match part {
            Segment::Text(text) => out.push_str(text),
            Segment::Positional => {
                position += 1;
                out.push_str(&style.marker(position));
            }
            Segment::Numbered(index) => out.push_str(&style.marker(index)),
            Segment::Named(name) => {
                out.push(':');
                out.push_str(name);
            }
        }
    }
    Cow::Owned(out)
}

/// Replace every `:name` with a positional marker and collect the values in bind order.
/// A name used twice is bound twice.
///
/// # Errors
/// Returns [`SqlDaoError::ParameterError`] for a name with no value or a positional marker.
pub fn expand_named(
    sql: &str,
    params: &NameParameter,
    style: PlaceholderStyle,
) -> Result<(String, Vec<RowValues>), SqlDaoError> {
    let mut out = String::with_capacity(sql.len());
    let mut values = Vec::with_capacity(params.len());

    for part in segments(sql) {
        match part {
            Segment::Text(text) => out.push_str(text),
            Segment::Positional | Segment::Numbered(_) => {
                return Err(SqlDaoError::ParameterError(
                    "positional marker in a statement bound by name".to_string(),
                ));
            }
            Segment::Named(name) => {
                let value = params.get(name).ok_or_else(|| {
                    SqlDaoError::ParameterError(format!("no value supplied for :{name}"))
                })?;
                values.push(value.clone());
                out.push_str(&style.marker(values.len()));
            }
        }
    }

    Ok((out, values))
}
