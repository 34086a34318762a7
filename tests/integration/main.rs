//! Integration tests for the docreview CLI
//!
//! These tests run the binary against a store in a temporary directory,
//! covering the full cycle of: init → assign → list → status

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use docreview::adapters::toml::load_file;
use docreview::core::models::TagId;
use predicates::prelude::*;
use tempfile::TempDir;

const STORE: &str = r#"
[[users]]
id = 1
username = "alice"
groups = ["Staff"]

[[users]]
id = 2
username = "bob"
groups = ["Staff"]

[[users]]
id = 3
username = "carol"

[[users]]
id = 4
username = "root"
is_superuser = true

[[tags]]
id = 1
name = "urgent"
due_date = "2024-06-01"

[[documents]]
id = 1
title = "Invoice 2024-001"

[[documents]]
id = 2
title = "Invoice 2024-002"
"#;

/// Helper function to create a docreview command
fn docreview() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("docreview"));
    cmd.env_remove("DOCREVIEW_USER");
    cmd
}

/// Helper to initialize a project and fill its store
fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    docreview().arg("init").current_dir(temp.path()).assert().success();
    fs::write(temp.path().join(".docreview/store.toml"), STORE).unwrap();
    temp
}

fn assign_urgent(dir: &Path) {
    docreview()
        .args(["--user", "alice", "assign", "apply", "1", "2", "999"])
        .args(["--assignee", "bob", "--tag", "urgent"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation task created for 2 documents."));
}

fn task_list_json(dir: &Path, user: &str) -> serde_json::Value {
    let output = docreview()
        .args(["--json", "task", "list"])
        .env("DOCREVIEW_USER", user)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// INIT
// =============================================================================

#[test]
fn test_init_creates_config_and_store() {
    let temp = TempDir::new().unwrap();

    docreview()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("docreview initialized"));

    assert!(temp.path().join(".docreview.toml").exists());
    assert!(temp.path().join(".docreview/store.toml").exists());

    docreview()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

// =============================================================================
// END-TO-END WORKFLOW
// =============================================================================

#[test]
fn test_e2e_assign_list_and_complete() {
    let temp = setup();
    let dir = temp.path();

    // Step 1: form display prefills the requester
    docreview()
        .args(["--user", "alice", "--json", "assign", "begin", "1", "2"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assigned_to\": \"alice\""));

    // Step 2: apply with one unknown document
    assign_urgent(dir);

    // Step 3: assignee and creator see the task, others do not
    let listing = task_list_json(dir, "bob");
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["tasks"][0]["assigned_to"], "bob");
    assert_eq!(listing["tasks"][0]["created_by"], "alice");
    assert_eq!(listing["tasks"][0]["due_date"], "2024-06-01");
    assert_eq!(listing["tasks"][0]["documents_count"], 2);

    assert_eq!(task_list_json(dir, "alice")["total"], 1);
    assert_eq!(task_list_json(dir, "root")["total"], 1);
    assert_eq!(task_list_json(dir, "carol")["total"], 0);

    // Step 4: documents carry the tag
    let store = load_file(&dir.join(".docreview/store.toml")).unwrap();
    assert!(store.documents.iter().all(|d| d.has_tag(TagId(1))));

    // Step 5: the assignee completes the task
    docreview()
        .args(["--user", "bob", "task", "status", "1", "done"])
        .current_dir(dir)
        .assert()
        .success();

    docreview()
        .args(["--user", "bob", "--json", "task", "show", "1"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"done\""));
}

#[test]
fn test_task_list_filters() {
    let temp = setup();
    let dir = temp.path();
    assign_urgent(dir);

    docreview()
        .args(["--user", "root", "--json", "task", "list", "--status", "done"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 0"));

    docreview()
        .args(["--user", "root", "--json", "task", "list", "--tag", "urgent", "--document", "2"])
        .current_dir(dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 1"));

    docreview()
        .args(["--user", "root", "task", "list", "--assignee", "nobody"])
        .current_dir(dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user: nobody"));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_blank_assignee_shows_form_errors() {
    let temp = setup();
    let dir = temp.path();

    docreview()
        .args(["--user", "alice", "assign", "apply", "1", "--assignee", "", "--tag", "urgent"])
        .current_dir(dir)
        .assert()
        .failure()
        .stdout(predicate::str::contains("This field is required."));

    assert_eq!(task_list_json(dir, "root")["total"], 0);
}

#[test]
fn test_basic_user_cannot_assign() {
    let temp = setup();

    docreview()
        .args(["--user", "carol", "assign", "apply", "1", "--assignee", "bob", "--tag", "urgent"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Permission denied"));
}

#[test]
fn test_unknown_task_is_not_found() {
    let temp = setup();
    assign_urgent(temp.path());

    docreview()
        .args(["--user", "carol", "task", "show", "1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_requires_user() {
    let temp = setup();

    docreview()
        .args(["task", "list"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user given"));
}
