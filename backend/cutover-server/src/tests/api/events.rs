use crate::api::events::encode_event;

use cutover_core::{Task, TaskType};

use chrono::NaiveDate;
use serde::{Serialize, Serializer, ser::Error};

/// Serializes only as an error
struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("cannot encode"))
    }
}

#[test]
fn given_tasks_when_encoding_then_event_is_produced() {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let mut task = Task::new(1, "Freeze", start, 1);
    task.task_type = TaskType::Cutover;

    assert!(encode_event(&[task]).is_some());
}

#[test]
fn given_unencodable_payload_when_encoding_then_event_is_skipped() {
    assert!(encode_event(&Unencodable).is_none());
}
