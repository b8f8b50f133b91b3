use crate::tests::fixtures::task;
use crate::{CoreError, Snapshot, default_plan};

use serde_json::json;

#[test]
fn test_snapshot_export_then_import_reproduces_tasks() {
    let snapshot = Snapshot::capture("before go-live", &default_plan());

    let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();

    assert_eq!(restored.tasks, snapshot.tasks);
    assert_eq!(restored.name, "before go-live");
    assert_eq!(restored.created_at, snapshot.created_at);
}

#[test]
fn test_snapshot_summary_counts_tasks() {
    let snapshot = Snapshot::capture("two", &[task(1, None), task(2, Some(1))]);

    let summary = snapshot.summary();

    assert_eq!(summary.task_count, 2);
    assert_eq!(summary.name, "two");
}

#[test]
fn test_snapshot_import_names_offending_index() {
    let document = json!({
        "name": "broken",
        "createdAt": "2025-03-01T10:00:00Z",
        "tasks": [
            serde_json::to_value(task(1, None)).unwrap(),
            { "id": 2, "name": "Bad", "start": "2025-13-01", "end": "2025-01-02" }
        ]
    });

    let err = Snapshot::from_value(document).unwrap_err();

    match err {
        CoreError::Validation { message, field, .. } => {
            assert!(message.starts_with("tasks[1]"), "{message}");
            assert_eq!(field.as_deref(), Some("tasks"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_snapshot_import_rejects_unknown_type() {
    let mut bad = serde_json::to_value(task(1, None)).unwrap();
    bad["type"] = json!("phase");
    let document = json!({
        "name": "broken",
        "createdAt": "2025-03-01T10:00:00Z",
        "tasks": [bad]
    });

    assert!(Snapshot::from_value(document).is_err());
}

#[test]
fn test_snapshot_import_rejects_duplicate_ids() {
    let document = json!({
        "name": "dupes",
        "createdAt": "2025-03-01T10:00:00Z",
        "tasks": [
            serde_json::to_value(task(1, None)).unwrap(),
            serde_json::to_value(task(1, None)).unwrap()
        ]
    });

    assert!(Snapshot::from_value(document).is_err());
}

#[test]
fn test_snapshot_import_rejects_blank_name() {
    let document = json!({
        "name": "  ",
        "createdAt": "2025-03-01T10:00:00Z",
        "tasks": []
    });

    assert!(Snapshot::from_value(document).is_err());
}
