use crate::tests::fixtures::{day, task};
use crate::{NEW_TASK_NAME, Task, TaskStatus, TaskType};

use serde_json::json;

#[test]
fn test_task_new_uses_add_task_defaults() {
    let created = Task::new(42, NEW_TASK_NAME, day(3, 10), 7);

    assert_eq!(created.name, "New Task");
    assert_eq!(created.owner, "");
    assert_eq!(created.start, day(3, 10));
    assert_eq!(created.end, day(3, 11));
    assert_eq!(created.task_type, TaskType::Preparation);
    assert_eq!(created.status, TaskStatus::Todo);
    assert_eq!(created.order, 7);
    assert_eq!(created.parent_id, None);
    assert!(created.is_expanded);
    assert!(created.dependencies.is_empty());
}

#[test]
fn test_task_serializes_camel_case() {
    let mut t = task(5, Some(1));
    t.is_expanded = false;

    let value = serde_json::to_value(&t).unwrap();

    assert_eq!(value["parentId"], json!(1));
    assert_eq!(value["isExpanded"], json!(false));
    assert_eq!(value["type"], json!("prep"));
    assert_eq!(value["start"], json!("2025-01-01"));
}

#[test]
fn test_task_without_parent_omits_parent_id() {
    let value = serde_json::to_value(task(5, None)).unwrap();

    assert!(value.get("parentId").is_none());
}

#[test]
fn test_task_deserializes_with_defaults() {
    let parsed: Task = serde_json::from_value(json!({
        "id": 3,
        "name": "Freeze",
        "start": "2025-04-01",
        "end": "2025-04-02"
    }))
    .unwrap();

    assert_eq!(parsed.owner, "");
    assert!(parsed.dependencies.is_empty());
    assert!(parsed.is_expanded);
    assert_eq!(parsed.parent_id, None);
    assert_eq!(parsed.status, TaskStatus::Todo);
}

#[test]
fn test_task_rejects_non_iso_dates() {
    let result = serde_json::from_value::<Task>(json!({
        "id": 3,
        "name": "Freeze",
        "start": "04/01/2025",
        "end": "2025-04-02"
    }));

    assert!(result.is_err());
}

#[test]
fn test_task_duration_is_inclusive_and_at_least_one() {
    let mut t = task(1, None);
    t.start = day(1, 1);
    t.end = day(1, 1);
    assert_eq!(t.duration_days(), 1);

    t.end = day(1, 5);
    assert_eq!(t.duration_days(), 5);

    t.end = day(1, 1);
    t.start = day(1, 4);
    assert_eq!(t.duration_days(), 1);
}

#[test]
fn test_next_order_follows_maximum() {
    assert_eq!(Task::next_order(&[]), 1);

    let mut a = task(1, None);
    a.order = 10;
    let b = task(2, None);
    assert_eq!(Task::next_order(&[a, b]), 11);
}
