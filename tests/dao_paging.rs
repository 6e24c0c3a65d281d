mod common;

use common::{Recorded, RecordingExecutor, count_result, dao, result_set};
use serde::Deserialize;
use sql_dao::prelude::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Ticket {
    id: i64,
    title: String,
}

fn ticket_rows(ids: std::ops::RangeInclusive<i64>) -> ResultSet {
    result_set(
        &["ID", "TITLE"],
        ids.map(|i| vec![RowValues::Int(i), RowValues::Text(format!("t{i}"))])
            .collect(),
    )
}

#[tokio::test]
async fn offset_fetch_page_two_counts_then_pages() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    exec.push_result(count_result(95));
    exec.push_result(ticket_rows(21..=40));
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let criteria = Criteria::paged(2, 20).sort_asc("id");
    let params = Parameter::from(vec![RowValues::from("open")]);
    let page: Paging<Ticket> = dao
        .query_with_paging(
            "SELECT id, title FROM tickets WHERE status = ?",
            &params,
            Some(&criteria),
        )
        .await?;

    assert_eq!(page.items.len(), 20);
    assert_eq!(page.items[0], Ticket { id: 21, title: "t21".into() });
    assert_eq!(page.total_elements, 95);
    assert_eq!(page.total_pages, 5);
    assert!(!page.first);
    assert!(!page.last);
    assert_eq!(page.criteria.as_ref().and_then(|c| c.total_element), Some(95));
    assert_eq!(criteria.total_element, None);

    let calls = exec.calls();
    assert_eq!(
        calls[0],
        Recorded::Select {
            sql: "SELECT COUNT(*) AS TOTAL FROM (SELECT id, title FROM tickets WHERE status = @P1) TB"
                .into(),
            params: vec![RowValues::Text("open".into())],
        }
    );
    assert_eq!(
        calls[1],
        Recorded::Select {
            sql: "SELECT * FROM (SELECT id, title FROM tickets WHERE status = @P1) TB \
                  ORDER BY id ASC OFFSET @P2 ROWS FETCH NEXT @P3 ROWS ONLY"
                .into(),
            params: vec![
                RowValues::Text("open".into()),
                RowValues::Int(20),
                RowValues::Int(20),
            ],
        }
    );
    Ok(())
}

#[tokio::test]
async fn cached_total_skips_the_count_query() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Dollar, CallSyntax::Call);
    exec.push_result(ticket_rows(91..=95));
    let dao = dao(&exec, PagingDialect::LimitOffset);

    let criteria = Criteria::paged(10, 10).with_cached_total(95);
    let page: Paging<Ticket> = dao
        .query_with_paging("SELECT id, title FROM tickets", &Parameter::none(), Some(&criteria))
        .await?;

    assert!(page.last);
    assert_eq!(page.total_pages, 10);
    let calls = exec.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        Recorded::Select {
            sql: "SELECT * FROM (SELECT id, title FROM tickets) TB LIMIT $1 OFFSET $2".into(),
            params: vec![RowValues::Int(10), RowValues::Int(90)],
        }
    );
    Ok(())
}

#[tokio::test]
async fn numbered_markers_page_after_the_statement_binds() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Numbered, CallSyntax::Call);
    exec.push_result(count_result(3));
    exec.push_result(ticket_rows(2..=3));
    let dao = dao(&exec, PagingDialect::LimitOffset);

    let params = Parameter::from(vec![RowValues::Int(1)]);
    let page: Paging<Ticket> = dao
        .query_with_paging(
            "SELECT id, title FROM t WHERE id > ?1",
            &params,
            Some(&Criteria::paged(1, 2)),
        )
        .await?;
    assert_eq!(page.items.len(), 2);

    let calls = exec.calls();
    assert_eq!(
        calls[0],
        Recorded::Select {
            sql: "SELECT COUNT(*) AS TOTAL FROM (SELECT id, title FROM t WHERE id > ?1) TB".into(),
            params: vec![RowValues::Int(1)],
        }
    );
    assert_eq!(
        calls[1],
        Recorded::Select {
            sql: "SELECT * FROM (SELECT id, title FROM t WHERE id > ?1) TB LIMIT ?2 OFFSET ?3"
                .into(),
            params: vec![RowValues::Int(1), RowValues::Int(2), RowValues::Int(0)],
        }
    );
    Ok(())
}

#[tokio::test]
async fn dollar_markers_page_with_offset_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Dollar, CallSyntax::Call);
    exec.push_result(ticket_rows(5..=6));
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let criteria = Criteria::paged(3, 2).with_cached_total(6);
    let params = Parameter::from(vec![RowValues::from("open")]);
    let _: Paging<Ticket> = dao
        .query_with_paging(
            "SELECT id, title FROM tickets WHERE status = $1",
            &params,
            Some(&criteria),
        )
        .await?;

    assert_eq!(
        exec.calls()[0],
        Recorded::Select {
            sql: "SELECT * FROM (SELECT id, title FROM tickets WHERE status = $1) TB \
                  OFFSET $2 ROWS FETCH NEXT $3 ROWS ONLY"
                .into(),
            params: vec![
                RowValues::Text("open".into()),
                RowValues::Int(4),
                RowValues::Int(2),
            ],
        }
    );
    Ok(())
}

#[tokio::test]
async fn rownum_named_paging_expands_reserved_names() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Question, CallSyntax::JdbcEscape)
        .with_product("Oracle");
    exec.push_result(count_result(41));
    exec.push_result(ticket_rows(21..=40));
    let dao = dao(&exec, PagingDialect::RowNum);

    let mut named = NameParameter::new();
    named.add("dept", 7_i64);
    let page: Paging<Ticket> = dao
        .query_with_paging(
            "SELECT id, title FROM emp WHERE dept = :dept",
            &named.into(),
            Some(&Criteria::paged(2, 20)),
        )
        .await?;
    assert_eq!(page.total_pages, 3);

    let Recorded::Select { sql, params } = &exec.calls()[1] else {
        panic!("expected a select");
    };
    assert_eq!(
        sql,
        "SELECT T.* FROM (SELECT ROWNUM AS PAGE_ROW_NUM, T.* FROM (SELECT * FROM \
         (SELECT id, title FROM emp WHERE dept = ?) TB) T) T \
         WHERE T.PAGE_ROW_NUM > ? AND T.PAGE_ROW_NUM <= ?"
    );
    assert_eq!(
        params,
        &vec![RowValues::Int(7), RowValues::Int(20), RowValues::Int(40)]
    );
    assert!(dao.is_oracle().await);
    Ok(())
}

#[tokio::test]
async fn caller_bound_reserved_name_is_rejected() {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    exec.push_result(count_result(3));
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let mut named = NameParameter::new();
    named.add("P_ROW_START", 1_i64);
    let err = dao
        .query_with_paging::<Ticket>(
            "SELECT id, title FROM t WHERE id > :P_ROW_START",
            &named.into(),
            Some(&Criteria::paged(1, 10)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SqlDaoError::ParameterError(_)));
}

#[tokio::test]
async fn empty_count_is_zero_and_first() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    exec.push_result(result_set(&["TOTAL"], vec![]));
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    let page: Paging<Ticket> = dao
        .query_with_paging("SELECT id, title FROM t", &Parameter::none(), Some(&Criteria::paged(1, 10)))
        .await?;
    assert_eq!(page.total_elements, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.first);
    assert!(!page.last);
    assert!(page.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn inactive_paging_runs_the_wrapped_query_without_limits() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::AtP, CallSyntax::Exec);
    let dao = dao(&exec, PagingDialect::OffsetFetch);

    dao.query_to_paging::<Ticket>(
        "SELECT id, title FROM t",
        &Parameter::none(),
        &Criteria::new().sort_desc("id"),
    )
    .await?;
    assert_eq!(
        exec.calls()[0],
        Recorded::Select {
            sql: "SELECT * FROM (SELECT id, title FROM t) TB ORDER BY id DESC".into(),
            params: vec![],
        }
    );
    Ok(())
}

#[tokio::test]
async fn mapped_paging_uses_the_row_mapper() -> Result<(), Box<dyn std::error::Error>> {
    let exec = RecordingExecutor::new(PlaceholderStyle::Numbered, CallSyntax::JdbcEscape);
    exec.push_result(count_result(2));
    exec.push_result(ticket_rows(1..=2));
    let dao = dao(&exec, PagingDialect::LimitOffset);

    let page = dao
        .query_with_paging_mapped(
            "SELECT id, title FROM t",
            &Parameter::none(),
            Some(&Criteria::paged(1, 10)),
            |row| row.get_as::<String>("title"),
        )
        .await?;
    assert_eq!(page.items, vec!["t1".to_string(), "t2".to_string()]);
    assert!(page.first && page.last);
    Ok(())
}
