//! Bind-value containers for positional (`?`) and named (`:name`) statements.
//!
//! A statement is always bound through exactly one container kind; [`Parameter`] makes that
//! a type-level fact and the query dispatcher matches on it to pick the execution path.

use std::collections::{BTreeMap, HashMap};

use crate::error::SqlDaoError;
use crate::types::RowValues;

/// Positional bind values, in bind order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexParameter {
    values: Vec<RowValues>,
}

impl IndexParameter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append the next positional value.
    pub fn add(&mut self, value: impl Into<RowValues>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RowValues] {
        &self.values
    }

    /// Values in bind order, for the positional execution path.
    #[must_use]
    pub fn to_array_parameter(&self) -> Vec<RowValues> {
        self.values.clone()
    }
}

impl From<Vec<RowValues>> for IndexParameter {
    fn from(values: Vec<RowValues>) -> Self {
        Self { values }
    }
}

impl<V: Into<RowValues>> FromIterator<V> for IndexParameter {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Named bind values. Names are matched case-sensitively against `:name` markers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameParameter {
    values: HashMap<String, RowValues>,
}

impl NameParameter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any earlier value under the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<RowValues>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Insert a value under a name the caller must not already be using.
    ///
    /// # Errors
    /// Returns [`SqlDaoError::ParameterError`] when `name` is already bound.
    pub fn add_reserved(
        &mut self,
        name: &str,
        value: impl Into<RowValues>,
    ) -> Result<(), SqlDaoError> {
        if self.values.contains_key(name) {
            return Err(SqlDaoError::ParameterError(format!(
                "bind name {name} is reserved for paging and was already supplied by the caller"
            )));
        }
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RowValues> {
        self.values.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Name→value map, for the named execution path.
    #[must_use]
    pub fn to_sql_parameter(&self) -> &HashMap<String, RowValues> {
        &self.values
    }

    /// Name-sorted view used when logging statements.
    #[must_use]
    pub fn to_map_parameter(&self) -> BTreeMap<&str, &RowValues> {
        self.values.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

impl<K: Into<String>, V: Into<RowValues>> FromIterator<(K, V)> for NameParameter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Bind values for one statement: positional or named, never both.
///
/// The default is an empty positional container, which binds nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    Indexed(IndexParameter),
    Named(NameParameter),
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::Indexed(IndexParameter::default())
    }
}

impl Parameter {
    /// An empty positional container.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        matches!(self, Parameter::Named(_))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Parameter::Indexed(inx) => inx.is_empty(),
            Parameter::Named(name) => name.is_empty(),
        }
    }

    /// Positional values. A named container has no bind order and yields nothing here.
    #[must_use]
    pub fn to_array_parameter(&self) -> Vec<RowValues> {
        match self {
            Parameter::Indexed(inx) => inx.to_array_parameter(),
            Parameter::Named(_) => Vec::new(),
        }
    }

    /// Name→value map; `None` for a positional container.
    #[must_use]
    pub fn to_sql_parameter(&self) -> Option<&HashMap<String, RowValues>> {
        match self {
            Parameter::Indexed(_) => None,
            Parameter::Named(name) => Some(name.to_sql_parameter()),
        }
    }

    /// Diagnostic view keyed by name, or by 1-based position for positional values.
    #[must_use]
    pub fn to_map_parameter(&self) -> BTreeMap<String, RowValues> {
        match self {
            Parameter::Indexed(inx) => inx
                .as_slice()
                .iter()
                .enumerate()
                .map(|(i, v)| ((i + 1).to_string(), v.clone()))
                .collect(),
            Parameter::Named(name) => name
                .to_map_parameter()
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }
}

impl From<IndexParameter> for Parameter {
    fn from(value: IndexParameter) -> Self {
        Parameter::Indexed(value)
    }
}

impl From<NameParameter> for Parameter {
    fn from(value: NameParameter) -> Self {
        Parameter::Named(value)
    }
}

impl From<Vec<RowValues>> for Parameter {
    fn from(values: Vec<RowValues>) -> Self {
        Parameter::Indexed(IndexParameter::from(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexed_values_keep_bind_order() {
        let mut inx = IndexParameter::new();
        inx.add(1_i64).add("a").add(3_i64);
        let params = Parameter::from(inx);

        assert_eq!(
            params.to_array_parameter(),
            vec![
                RowValues::Int(1),
                RowValues::Text("a".into()),
                RowValues::Int(3)
            ]
        );
        assert!(params.to_sql_parameter().is_none());
    }

    #[test]
    fn empty_parameter_degrades_to_no_values() {
        let params = Parameter::none();
        assert!(params.is_empty());
        assert!(params.to_array_parameter().is_empty());
        assert!(params.to_map_parameter().is_empty());
    }

    #[test]
    fn named_add_replaces_but_reserved_add_refuses() {
        let mut name = NameParameter::new();
        name.add("P_ROW_START", 5_i64);
        name.add("P_ROW_START", 6_i64);
        assert_eq!(name.get("P_ROW_START"), Some(&RowValues::Int(6)));

        let err = name.add_reserved("P_ROW_START", 0_i64).unwrap_err();
        assert!(matches!(err, SqlDaoError::ParameterError(_)));
        assert_eq!(name.get("P_ROW_START"), Some(&RowValues::Int(6)));
    }

    #[test]
    fn named_map_view_is_sorted() {
        let name: NameParameter = [("b", 2_i64), ("a", 1_i64)].into_iter().collect();
        let view = Parameter::from(name).to_map_parameter();
        let keys: Vec<_> = view.keys().cloned().collect();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
