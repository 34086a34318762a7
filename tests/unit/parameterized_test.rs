//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use docreview::core::models::{TaskId, TaskStatus, User, UserId};
use docreview::core::services::{Role, VisibilityPolicy};
use test_case::test_case;

// =============================================================================
// Role Tests
// =============================================================================

#[test_case(false, &[], Role::Basic ; "no groups is basic")]
#[test_case(false, &["Staff"], Role::Staff ; "staff group is staff")]
#[test_case(false, &["staff"], Role::Basic ; "group match is case sensitive")]
#[test_case(false, &["Editors", "Staff"], Role::Staff ; "staff among other groups")]
#[test_case(true, &[], Role::Superuser ; "superuser without groups")]
#[test_case(true, &["Staff"], Role::Superuser ; "superuser in staff group")]
fn test_role(superuser: bool, groups: &[&str], expected: Role) {
    let mut user = if superuser { User::superuser(1, "u") } else { User::new(1, "u") };
    for group in groups {
        user = user.with_group(*group);
    }
    let policy = VisibilityPolicy::default();
    assert_eq!(policy.role(&user), expected);
    assert_eq!(policy.can_create(&user), expected != Role::Basic);
}

// =============================================================================
// Status Parsing Tests
// =============================================================================

#[test_case("pending", TaskStatus::Pending ; "pending")]
#[test_case("todo", TaskStatus::Pending ; "todo alias")]
#[test_case("in_progress", TaskStatus::InProgress ; "in progress")]
#[test_case("inprogress", TaskStatus::InProgress ; "in progress without underscore")]
#[test_case("started", TaskStatus::InProgress ; "started alias")]
#[test_case("done", TaskStatus::Done ; "done")]
#[test_case("completed", TaskStatus::Done ; "completed alias")]
#[test_case("DONE", TaskStatus::Done ; "case insensitive")]
fn test_status_parse(input: &str, expected: TaskStatus) {
    assert_eq!(input.parse::<TaskStatus>().unwrap(), expected);
}

#[test_case("closed" ; "unknown word")]
#[test_case("" ; "empty")]
fn test_status_parse_rejects(input: &str) {
    let err = input.parse::<TaskStatus>().unwrap_err();
    assert!(err.contains("Invalid status"));
}

#[test_case(TaskStatus::Pending, "pending" ; "pending")]
#[test_case(TaskStatus::InProgress, "in_progress" ; "in progress")]
#[test_case(TaskStatus::Done, "done" ; "done")]
fn test_status_display(status: TaskStatus, expected: &str) {
    assert_eq!(status.to_string(), expected);
}

// =============================================================================
// Id Parsing Tests
// =============================================================================

#[test_case("7", Some(7) ; "plain number")]
#[test_case(" 42 ", Some(42) ; "surrounding whitespace")]
#[test_case("alice", None ; "name is not an id")]
#[test_case("-1", None ; "negative")]
fn test_user_id_parse(input: &str, expected: Option<u64>) {
    assert_eq!(input.parse::<UserId>().ok(), expected.map(UserId));
}

#[test]
fn test_task_id_display_is_bare_number() {
    assert_eq!(TaskId(12).to_string(), "12");
}
