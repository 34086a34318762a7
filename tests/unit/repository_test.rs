//! Tests for the task repository

use docreview::core::models::{DocumentId, TagId};
use docreview::core::services::TaskRepository;

use crate::common::{alice, backend, bob, due, ids, later, urgent};

#[test]
fn test_create_task_with_partial_resolution() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);

    let creation = repo
        .create_task(bob().id, alice().id, Some(&urgent()), "", &ids(&[1, 2, 999]))
        .unwrap();

    assert_eq!(creation.linked, 2);
    assert_eq!(creation.missing, ids(&[999]));
    assert_eq!(creation.task.documents_count(), 2);
    assert_eq!(creation.task.due_date, Some(due()));
    assert_eq!(backend.document_saves(), 2);
}

#[test]
fn test_duplicate_ids_link_once() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);

    let creation = repo
        .create_task(bob().id, alice().id, Some(&later()), "", &ids(&[2, 2, 1, 2]))
        .unwrap();

    assert_eq!(creation.linked, 2);
    assert!(creation.missing.is_empty());
    assert_eq!(backend.document_saves(), 2);
}

#[test]
fn test_no_resolved_documents_still_creates_task() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);

    let creation = repo
        .create_task(bob().id, alice().id, Some(&urgent()), "", &ids(&[100, 200]))
        .unwrap();

    assert_eq!(creation.linked, 0);
    assert_eq!(creation.missing, ids(&[100, 200]));
    assert_eq!(backend.tasks().len(), 1);
    assert_eq!(backend.document_saves(), 0);
}

#[test]
fn test_documents_already_tagged_are_saved_again() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);
    repo.create_task(bob().id, alice().id, Some(&urgent()), "", &ids(&[1])).unwrap();

    let creation = repo
        .create_task(bob().id, alice().id, Some(&urgent()), "", &ids(&[1, 3]))
        .unwrap();

    assert_eq!(creation.already_tagged, ids(&[1]));
    assert_eq!(backend.document_saves(), 3);
    assert!(backend.document(DocumentId(3)).unwrap().has_tag(TagId(1)));
}

#[test]
fn test_without_tag_documents_untouched() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);

    let creation = repo.create_task(bob().id, alice().id, None, "note", &ids(&[1])).unwrap();

    assert_eq!(creation.task.tag, None);
    assert_eq!(creation.task.due_date, None);
    assert_eq!(creation.task.note, "note");
    assert_eq!(backend.document_saves(), 0);
}

#[test]
fn test_due_date_is_a_snapshot() {
    let backend = backend();
    let repo = TaskRepository::new(&backend, &backend);
    let creation = repo
        .create_task(bob().id, alice().id, Some(&urgent()), "", &ids(&[1]))
        .unwrap();

    let moved = urgent().with_due_date(chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    backend.insert_tag(moved);

    assert_eq!(backend.tasks()[0].id, creation.task.id);
    assert_eq!(backend.tasks()[0].due_date, Some(due()));
}
