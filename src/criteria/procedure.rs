use serde::{Deserialize, Serialize};

use crate::executor::CallSyntax;
use crate::sql_types::SqlTypes;
use crate::translation::PlaceholderStyle;
use crate::types::RowValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcedureDirection {
    #[default]
    In,
    Out,
    InOut,
}

/// One procedure argument: value, direction, and the SQL type used to bind it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureParam {
    pub value: RowValues,
    pub direction: ProcedureDirection,
    pub sql_type: SqlTypes,
}

impl ProcedureParam {
    /// An `IN` argument bound as `VARCHAR`.
    #[must_use]
    pub fn new(value: impl Into<RowValues>) -> Self {
        Self::with_type(value, SqlTypes::Varchar)
    }

    #[must_use]
    pub fn with_type(value: impl Into<RowValues>, sql_type: SqlTypes) -> Self {
        Self {
            value: value.into(),
            direction: ProcedureDirection::In,
            sql_type,
        }
    }

    #[must_use]
    pub fn with_direction(
        value: impl Into<RowValues>,
        direction: ProcedureDirection,
        sql_type: SqlTypes,
    ) -> Self {
        Self {
            value: value.into(),
            direction,
            sql_type,
        }
    }
}

/// A stored procedure and its ordered arguments.
///
/// ```rust
/// use sql_dao::prelude::*;
///
/// let mut call = ProcedureCriteria::new("refresh_totals");
/// call.add_param_typed(2024, SqlTypes::Integer);
/// call.add_param_with(Option::<String>::None, ProcedureDirection::Out, SqlTypes::Varchar);
/// assert_eq!(call.call_signature(), "{ call refresh_totals(?, ?) }");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcedureCriteria {
    pub name: String,
    pub params: Vec<ProcedureParam>,
}

impl ProcedureCriteria {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn add(&mut self, param: ProcedureParam) -> &mut Self {
        self.params.push(param);
        self
    }

    /// An `IN` argument with type `OTHER`.
    pub fn add_param(&mut self, value: impl Into<RowValues>) -> &mut Self {
        self.add_param_with(value, ProcedureDirection::In, SqlTypes::Other)
    }

    pub fn add_param_typed(&mut self, value: impl Into<RowValues>, sql_type: SqlTypes) -> &mut Self {
        self.add_param_with(value, ProcedureDirection::In, sql_type)
    }

    pub fn add_param_directed(
        &mut self,
        value: impl Into<RowValues>,
        direction: ProcedureDirection,
    ) -> &mut Self {
        self.add_param_with(value, direction, SqlTypes::Other)
    }

    pub fn add_param_with(
        &mut self,
        value: impl Into<RowValues>,
        direction: ProcedureDirection,
        sql_type: SqlTypes,
    ) -> &mut Self {
        self.add(ProcedureParam::with_direction(value, direction, sql_type))
    }

    pub fn reset_params(&mut self) {
        self.params.clear();
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// JDBC escape form: `{ call name(?, ?) }`, or `{ call name() }` without arguments.
    #[must_use]
    pub fn call_signature(&self) -> String {
        self.render_call(CallSyntax::JdbcEscape, PlaceholderStyle::Question)
    }

    /// Render the call in the syntax and placeholder style a backend executes natively.
    #[must_use]
    pub fn render_call(&self, syntax: CallSyntax, style: PlaceholderStyle) -> String {
        let name = self.name.trim();
        let markers = (1..=self.params.len())
            .map(|i| style.marker(i))
            .collect::<Vec<_>>()
            .join(", ");

        match syntax {
            CallSyntax::JdbcEscape => format!("{{ call {name}({markers}) }}"),
            CallSyntax::Call => format!("CALL {name}({markers})"),
            CallSyntax::Exec if markers.is_empty() => format!("EXEC {name}"),
            CallSyntax::Exec => format!("EXEC {name} {markers}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_without_params_has_empty_parens() {
        let call = ProcedureCriteria::new("purge_sessions");
        assert_eq!(call.call_signature(), "{ call purge_sessions() }");
    }

    #[test]
    fn signature_has_one_marker_per_param() {
        let mut call = ProcedureCriteria::new("p");
        call.add_param(1).add_param("x").add_param(RowValues::Null);
        assert_eq!(call.call_signature(), "{ call p(?, ?, ?) }");
    }

    #[test]
    fn native_renderings() {
        let mut call = ProcedureCriteria::new(" audit.log_event ");
        call.add_param("login").add_param(7);
        assert_eq!(
            call.render_call(CallSyntax::Call, PlaceholderStyle::Dollar),
            "CALL audit.log_event($1, $2)"
        );
        assert_eq!(
            call.render_call(CallSyntax::Exec, PlaceholderStyle::AtP),
            "EXEC audit.log_event @P1, @P2"
        );
        call.reset_params();
        assert_eq!(
            call.render_call(CallSyntax::Exec, PlaceholderStyle::AtP),
            "EXEC audit.log_event"
        );
    }

    #[test]
    fn defaults_follow_the_adder_used() {
        let mut call = ProcedureCriteria::new("p");
        call.add_param(1);
        call.add(ProcedureParam::new("v"));
        assert_eq!(call.params[0].sql_type, SqlTypes::Other);
        assert_eq!(call.params[1].sql_type, SqlTypes::Varchar);
        assert!(call.params.iter().all(|p| p.direction == ProcedureDirection::In));
    }

    #[test]
    fn blank_name_is_not_a_name() {
        assert!(!ProcedureCriteria::new("  ").has_name());
        assert!(!ProcedureCriteria::default().has_name());
        assert!(ProcedureCriteria::new("p").has_name());
    }
}
