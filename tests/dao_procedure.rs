mod common;

use common::{Recorded, RecordingExecutor, dao, result_set};
use sql_dao::prelude::*;

#[tokio::test]
async fn missing_or_blank_criteria_fails_before_any_call() {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let err = dao.execute_procedure(None).await.unwrap_err();
    assert!(matches!(err, SqlDaoError::InvalidArgument(_)));

    let blank = ProcedureCriteria::new("   ");
    let err = dao.execute_procedure(Some(&blank)).await.unwrap_err();
    assert!(matches!(err, SqlDaoError::InvalidArgument(_)));

    assert!(exec.calls().is_empty());
}

#[tokio::test]
async fn each_argument_is_bound_once_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    exec.push_result(result_set(&["status"], vec![vec![RowValues::Text("ok".into())]]));
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let mut call = ProcedureCriteria::new("dbo.close_period");
    call.add_param_typed(2024, SqlTypes::Integer)
        .add_param_with(Option::<String>::None, ProcedureDirection::In, SqlTypes::Varchar)
        .add_param_directed(RowValues::Null, ProcedureDirection::Out);

    let rs = dao.execute_procedure(Some(&call)).await?;
    assert_eq!(rs.first().and_then(|r| r.get("STATUS")), Some(&RowValues::Text("ok".into())));

    let Recorded::Call { sql, params } = &exec.calls()[0] else {
        panic!("expected a call");
    };
    assert_eq!(sql, "EXEC dbo.close_period @P1, @P2, @P3");
    assert_eq!(params.len(), 3);
    assert_eq!(params[0].value, RowValues::Int(2024));
    assert!(params[1].is_typed_null());
    assert_eq!(params[1].sql_type, SqlTypes::Varchar);
    assert_eq!(params[2].direction, ProcedureDirection::Out);
    assert_eq!(params[2].sql_type, SqlTypes::Other);
    Ok(())
}

#[tokio::test]
async fn postgres_style_call_syntax() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Dollar, CallSyntax::Call);
    let dao = dao(&exec, PagingDialect::LimitOffset);

    let mut call = ProcedureCriteria::new("refresh_totals");
    call.add_param(1_i64);
    dao.execute_procedure(Some(&call)).await?;

    let Recorded::Call { sql, .. } = &exec.calls()[0] else {
        panic!("expected a call");
    };
    assert_eq!(sql, "CALL refresh_totals($1)");
    assert_eq!(call.call_signature(), "{ call refresh_totals(?) }");
    Ok(())
}
