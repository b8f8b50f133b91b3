use crate::{TaskStatus, TaskType};

use std::str::FromStr;

#[test]
fn test_task_type_round_trips_through_str() {
    for task_type in TaskType::ALL {
        assert_eq!(TaskType::from_str(task_type.as_str()).unwrap(), task_type);
    }
}

#[test]
fn test_task_type_wire_names() {
    assert_eq!(
        serde_json::to_string(&TaskType::UpstreamIntegration).unwrap(),
        "\"upstream\""
    );
    assert_eq!(TaskType::Preparation.as_str(), "prep");
    assert_eq!(TaskType::default(), TaskType::Preparation);
}

#[test]
fn test_task_type_unknown_value_is_error() {
    assert!(TaskType::from_str("phase").is_err());
}

#[test]
fn test_task_type_has_label_and_color() {
    for task_type in TaskType::ALL {
        assert!(!task_type.label().is_empty());
        assert!(task_type.color().starts_with('#'));
    }
}

#[test]
fn test_task_status_wire_names() {
    assert_eq!(
        serde_json::to_string(&TaskStatus::InProgress).unwrap(),
        "\"in-progress\""
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);
    assert!(TaskStatus::from_str("in_progress").is_err());
}
