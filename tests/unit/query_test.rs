//! Tests for task filters, search and summaries

use chrono::{Duration, NaiveDate};
use docreview::core::models::{DocumentId, TagId, TaskStatus, UserId, ValidationTask};
use docreview::core::services::{NameIndex, TaskQuery, TaskSummary};

use crate::common::{alice, backend, ids, root, task, workflow};

fn names() -> NameIndex {
    let mut names = NameIndex::default();
    names.insert_user(UserId(1), "alice");
    names.insert_user(UserId(2), "bob");
    names.insert_tag(TagId(1), "urgent");
    names
}

fn sample() -> Vec<ValidationTask> {
    let mut first = task(1, 2, 1);
    first.tag = Some(TagId(1));
    first.due_date = NaiveDate::from_ymd_opt(2024, 6, 1);
    first.documents = [DocumentId(1), DocumentId(2)].into();

    let mut second = task(2, 1, 1);
    second.status = TaskStatus::Done;
    second.note = "Check the TOTALS".to_string();
    second.created_at += Duration::hours(1);

    let mut third = task(3, 2, 2);
    third.due_date = NaiveDate::from_ymd_opt(2024, 9, 1);
    third.documents = [DocumentId(3)].into();

    vec![first, second, third]
}

fn apply(query: &TaskQuery) -> Vec<u64> {
    query.apply(sample(), &names()).iter().map(|t| t.id.get()).collect()
}

#[test]
fn test_empty_query_orders_newest_first() {
    let query = TaskQuery::default();
    assert!(query.is_empty());
    assert_eq!(apply(&query), vec![2, 3, 1]);
}

#[test]
fn test_filters() {
    let by_status = TaskQuery {
        status: Some(TaskStatus::Pending),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&by_status), vec![3, 1]);

    let by_assignee = TaskQuery {
        assigned_to: Some(UserId(1)),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&by_assignee), vec![2]);

    let by_creator = TaskQuery {
        created_by: Some(UserId(2)),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&by_creator), vec![3]);

    let by_tag = TaskQuery {
        tag: Some(TagId(1)),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&by_tag), vec![1]);

    let by_document = TaskQuery {
        document: Some(DocumentId(3)),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&by_document), vec![3]);
}

#[test]
fn test_due_before_skips_undated_tasks() {
    let query = TaskQuery {
        due_before: NaiveDate::from_ymd_opt(2024, 6, 30),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&query), vec![1]);
}

#[test]
fn test_search_note_assignee_and_tag() {
    let search = |term: &str| TaskQuery {
        search: Some(term.to_string()),
        ..TaskQuery::default()
    };
    assert_eq!(apply(&search("totals")), vec![2]);
    assert_eq!(apply(&search("BOB")), vec![3, 1]);
    assert_eq!(apply(&search("urg")), vec![1]);
    assert_eq!(apply(&search("   ")), vec![2, 3, 1]);
}

#[test]
fn test_summary_falls_back_to_ids() {
    let mut t = task(7, 9, 1);
    t.tag = Some(TagId(5));
    let summary = TaskSummary::from_task(&t, &names());
    assert_eq!(summary.assigned_to, "#9");
    assert_eq!(summary.created_by, "alice");
    assert_eq!(summary.tag.as_deref(), Some("#5"));
}

#[test]
fn test_list_tasks_narrows_visible_set() {
    let backend = backend();
    let wf = workflow(&backend);
    wf.apply_assignment(&ids(&[1]), Some("bob"), Some("urgent"), None, &alice()).unwrap();
    wf.apply_assignment(&ids(&[2]), Some("dave"), Some("later"), None, &root()).unwrap();

    let query = TaskQuery {
        search: Some("later".to_string()),
        ..TaskQuery::default()
    };
    assert!(wf.list_tasks(&alice(), &query).unwrap().is_empty());

    let rows = wf.list_tasks(&root(), &query).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].assigned_to, "dave");
    assert_eq!(rows[0].tag.as_deref(), Some("later"));
}
