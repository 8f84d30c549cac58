use chrono::{DateTime, TimeZone, Utc};
use engine::{
    CapabilityRegistry, DatasetType, KeysetPaginator, MemoryProvider, Paginated, PaginationError,
    PaginationParams, StrategySelector,
};
use model::{
    core::{data_type::DataType, value::Value},
    error::CursorError,
    order::{
        definition::{OrderDefinition, OrderDirection},
        spec::OrderSpec,
    },
    pagination::{
        codec::CursorCodec,
        cursor::Cursor,
        page::{OffsetRequest, PageRequest},
    },
    records::row::{FieldValue, Row},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

fn created_at_id_desc() -> OrderSpec {
    OrderSpec::new(vec![
        OrderDefinition::desc("created_at", DataType::Timestamp),
        OrderDefinition::tie_breaker("id", OrderDirection::Descending, DataType::Integer),
    ])
    .unwrap()
}

fn row(day: u32, id: i64) -> Row {
    Row::from_pairs(vec![
        ("created_at", Value::Timestamp(ts(day))),
        ("id", Value::Int(id)),
    ])
}

/// The dataset from the boundary examples: sorted descending by
/// (created_at, id) it reads [(T3,9), (T2,7), (T2,5), (T1,2)].
fn provider() -> MemoryProvider {
    MemoryProvider::new(vec![row(2, 5), row(3, 9), row(1, 2), row(2, 7)])
}

fn registry() -> CapabilityRegistry {
    CapabilityRegistry::builder()
        .register(DatasetType::new("issues"), created_at_id_desc())
        .build()
}

fn cursor_token(order: &OrderSpec, day: u32, id: i64) -> String {
    CursorCodec::new(order).encode(&Cursor::new(vec![
        FieldValue::new("created_at", Value::Timestamp(ts(day))),
        FieldValue::new("id", Value::Int(id)),
    ]))
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter()
        .map(|r| match r.get_value("id") {
            Value::Int(id) => id,
            other => panic!("unexpected id value {other:?}"),
        })
        .collect()
}

#[test]
fn first_page_of_a_descending_dataset() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let page = paginator
        .paginate(&provider(), &DatasetType::new("issues"), &order, &PageRequest::new(2))
        .unwrap();

    assert_eq!(ids(&page.rows), vec![9, 7]);
    assert!(page.has_next_page);
    assert!(!page.has_previous_page);
    assert_eq!(page.end_cursor, Some(cursor_token(&order, 2, 7)));
    assert_eq!(page.start_cursor, Some(cursor_token(&order, 3, 9)));
}

#[test]
fn second_page_resumes_after_the_end_cursor() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();
    let issues = DatasetType::new("issues");

    let first = paginator
        .paginate(&provider(), &issues, &order, &PageRequest::new(2))
        .unwrap();
    let second = paginator
        .paginate(
            &provider(),
            &issues,
            &order,
            &PageRequest::new(2).after(first.end_cursor.unwrap()),
        )
        .unwrap();

    // Duplicate created_at values span the page boundary; the tie-breaker
    // keeps rows from repeating or going missing.
    assert_eq!(ids(&second.rows), vec![5, 2]);
    assert!(!second.has_next_page);
    assert!(second.has_previous_page);
}

#[test]
fn backward_page_before_a_bound() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let page = paginator
        .paginate(
            &provider(),
            &DatasetType::new("issues"),
            &order,
            &PageRequest::new(2)
                .before(cursor_token(&order, 2, 7))
                .last(true),
        )
        .unwrap();

    // Only one row exists strictly before (T2, 7); it comes back in
    // caller-facing descending order.
    assert_eq!(ids(&page.rows), vec![9]);
    assert!(!page.has_previous_page);
    assert!(page.has_next_page);
    assert_eq!(page.start_cursor, Some(cursor_token(&order, 3, 9)));
}

#[test]
fn backward_and_forward_traversal_agree() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();
    let issues = DatasetType::new("issues");

    let backward = paginator
        .paginate(
            &provider(),
            &issues,
            &order,
            &PageRequest::new(3)
                .before(cursor_token(&order, 1, 2))
                .last(true),
        )
        .unwrap();
    let forward = paginator
        .paginate(&provider(), &issues, &order, &PageRequest::new(3))
        .unwrap();

    assert_eq!(ids(&backward.rows), vec![9, 7, 5]);
    assert_eq!(backward.rows, forward.rows);
}

#[test]
fn sequential_walk_covers_the_dataset_exactly_once() {
    init_tracing();
    // Heavy duplication on the leading column: three rows per timestamp.
    let rows: Vec<Row> = (1..=9).map(|id| row(1 + (id as u32 % 3), id)).collect();
    let expected: Vec<i64> = {
        let mut sorted = rows.clone();
        let order = created_at_id_desc();
        sorted.sort_by(|a, b| order.compare_rows(a, b).unwrap());
        ids(&sorted)
    };
    let provider = MemoryProvider::new(rows);

    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();
    let issues = DatasetType::new("issues");

    let mut collected = Vec::new();
    let mut request = PageRequest::new(2);
    loop {
        let page = paginator.paginate(&provider, &issues, &order, &request).unwrap();
        collected.extend(ids(&page.rows));
        match (page.has_next_page, page.end_cursor) {
            (true, Some(token)) => request = PageRequest::new(2).after(token),
            _ => break,
        }
    }

    assert_eq!(collected, expected);
}

#[test]
fn mixed_direction_walk_covers_the_dataset_exactly_once() {
    init_tracing();
    // Ascending priority with a descending id tie-breaker flips the
    // comparator per column; three rows share each priority.
    let order = OrderSpec::new(vec![
        OrderDefinition::asc("priority", DataType::Integer),
        OrderDefinition::tie_breaker("id", OrderDirection::Descending, DataType::Integer),
    ])
    .unwrap();
    let rows: Vec<Row> = (1..=9)
        .map(|id| {
            Row::from_pairs(vec![("priority", Value::Int(id % 3)), ("id", Value::Int(id))])
        })
        .collect();
    let expected: Vec<i64> = {
        let mut sorted = rows.clone();
        sorted.sort_by(|a, b| order.compare_rows(a, b).unwrap());
        ids(&sorted)
    };
    assert_eq!(expected, vec![9, 6, 3, 7, 4, 1, 8, 5, 2]);
    let provider = MemoryProvider::new(rows);

    let tasks = DatasetType::new("tasks");
    let registry = CapabilityRegistry::builder()
        .register(tasks.clone(), order.clone())
        .build();
    let paginator = KeysetPaginator::new(&registry);

    let mut collected = Vec::new();
    let mut request = PageRequest::new(2);
    let final_page_start;
    loop {
        let page = paginator.paginate(&provider, &tasks, &order, &request).unwrap();
        collected.extend(ids(&page.rows));
        match (page.has_next_page, page.end_cursor) {
            (true, Some(token)) => request = PageRequest::new(2).after(token),
            _ => {
                final_page_start = page.start_cursor;
                break;
            }
        }
    }
    assert_eq!(collected, expected);

    // Stepping back from the final page returns the preceding rows in
    // caller-facing order.
    let bound = final_page_start.unwrap();
    let back = paginator
        .paginate(&provider, &tasks, &order, &PageRequest::new(2).before(bound).last(true))
        .unwrap();
    assert_eq!(ids(&back.rows), vec![8, 5]);
    assert!(back.has_next_page);
    assert!(back.has_previous_page);
}

#[test]
fn empty_dataset_yields_an_empty_page() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let page = paginator
        .paginate(
            &MemoryProvider::new(vec![]),
            &DatasetType::new("issues"),
            &order,
            &PageRequest::new(5),
        )
        .unwrap();

    assert!(page.rows.is_empty());
    assert!(!page.has_next_page);
    assert!(!page.has_previous_page);
    assert!(page.start_cursor.is_none());
    assert!(page.end_cursor.is_none());
}

#[test]
fn exactly_limit_rows_means_no_next_page() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let page = paginator
        .paginate(&provider(), &DatasetType::new("issues"), &order, &PageRequest::new(4))
        .unwrap();

    assert_eq!(ids(&page.rows), vec![9, 7, 5, 2]);
    assert!(!page.has_next_page);
}

#[test]
fn zero_limit_is_clamped_to_one_row() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let page = paginator
        .paginate(&provider(), &DatasetType::new("issues"), &order, &PageRequest::new(0))
        .unwrap();

    assert_eq!(ids(&page.rows), vec![9]);
    assert!(page.has_next_page);
}

#[test]
fn malformed_cursor_surfaces_unless_lenient() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();
    let issues = DatasetType::new("issues");

    let err = paginator
        .paginate(
            &provider(),
            &issues,
            &order,
            &PageRequest::new(2).after("%%%not-a-token%%%"),
        )
        .unwrap_err();
    assert_eq!(err, PaginationError::Cursor(CursorError::Encoding));

    // Lenient mode treats the bad token as "no cursor".
    let page = paginator
        .paginate(
            &provider(),
            &issues,
            &order,
            &PageRequest::new(2)
                .after("%%%not-a-token%%%")
                .lenient_cursors(true),
        )
        .unwrap();
    assert_eq!(ids(&page.rows), vec![9, 7]);
    assert!(!page.has_previous_page);
}

#[test]
fn cursor_from_another_order_spec_is_rejected() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);
    let order = created_at_id_desc();

    let other = OrderSpec::single(OrderDefinition::tie_breaker(
        "name",
        OrderDirection::Ascending,
        DataType::String,
    ))
    .unwrap();
    let token = CursorCodec::new(&other).encode(&Cursor::new(vec![FieldValue::new(
        "name",
        Value::String("a".into()),
    )]));

    let err = paginator
        .paginate(
            &provider(),
            &DatasetType::new("issues"),
            &order,
            &PageRequest::new(2).after(token),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        PaginationError::Cursor(CursorError::AttributeMismatch { .. })
    ));
}

#[test]
fn unregistered_order_is_rejected_by_the_paginator() {
    init_tracing();
    let registry = registry();
    let paginator = KeysetPaginator::new(&registry);

    let by_id = OrderSpec::single(OrderDefinition::tie_breaker(
        "id",
        OrderDirection::Ascending,
        DataType::Integer,
    ))
    .unwrap();
    let err = paginator
        .paginate(&provider(), &DatasetType::new("issues"), &by_id, &PageRequest::new(2))
        .unwrap_err();
    assert!(matches!(err, PaginationError::UnsupportedScopeOrder { .. }));
}

#[test]
fn selector_refuses_offset_pagination_on_enforced_datasets() {
    init_tracing();
    let audits = DatasetType::new("audit_events");
    let registry = CapabilityRegistry::builder()
        .register(audits.clone(), created_at_id_desc())
        .enforce(audits.clone(), 2)
        .build();
    let selector = StrategySelector::new(&registry);
    let order = created_at_id_desc();

    // Four rows, threshold two: offset parameters are refused outright.
    let err = selector
        .paginate(
            &provider(),
            &audits,
            &order,
            &PaginationParams::Offset(OffsetRequest::new(1, 2)),
        )
        .unwrap_err();
    assert!(matches!(err, PaginationError::EnforcementViolation { .. }));

    // Keyset parameters still work.
    let result = selector
        .paginate(
            &provider(),
            &audits,
            &order,
            &PaginationParams::Keyset(PageRequest::new(2)),
        )
        .unwrap();
    match result {
        Paginated::Keyset(page) => assert_eq!(ids(&page.rows), vec![9, 7]),
        Paginated::Offset(_) => panic!("expected keyset page"),
    }
}

#[test]
fn selector_falls_back_to_offset_when_allowed() {
    init_tracing();
    let issues = DatasetType::new("issues");
    let registry = CapabilityRegistry::builder().build();
    let selector = StrategySelector::new(&registry);
    let order = created_at_id_desc();

    let result = selector
        .paginate(
            &provider(),
            &issues,
            &order,
            &PaginationParams::Offset(OffsetRequest::new(1, 3)),
        )
        .unwrap();
    match result {
        Paginated::Offset(page) => {
            assert_eq!(ids(&page.rows), vec![9, 7, 5]);
            assert_eq!(page.total_count, 4);
            assert_eq!(page.total_pages, 2);
            assert_eq!(page.next_page, Some(2));
            assert_eq!(page.prev_page, None);
        }
        Paginated::Keyset(_) => panic!("expected offset page"),
    }
}
