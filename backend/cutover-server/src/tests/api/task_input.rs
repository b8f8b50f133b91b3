use crate::decode_task;

use cutover_core::{TaskIdGenerator, TaskStatus, TaskType};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_body_without_id_when_decoded_then_fresh_id_and_next_order() {
    let ids = TaskIdGenerator::new();

    let task = decode_task(
        json!({"name": "Freeze", "start": "2025-03-01", "end": "2025-03-02"}),
        &ids,
        12,
    )
    .unwrap();

    assert_that!(task.id, gt(0));
    assert_that!(task.order, eq(12));
    assert_that!(task.task_type, eq(TaskType::Preparation));
    assert_that!(task.status, eq(TaskStatus::Todo));
    assert_that!(task.is_expanded, eq(true));
}

#[test]
fn given_explicit_id_when_decoded_then_kept_and_later_ids_are_above_it() {
    let ids = TaskIdGenerator::new();
    let far_future = 9_000_000_000_000;

    let task = decode_task(
        json!({"id": far_future, "name": "x", "start": "2025-03-01", "end": "2025-03-01", "order": 3}),
        &ids,
        12,
    )
    .unwrap();

    assert_that!(task.id, eq(far_future));
    assert_that!(task.order, eq(3));
    assert_that!(ids.next_id(), gt(far_future));
}

#[test]
fn given_null_id_when_decoded_then_treated_as_missing() {
    let ids = TaskIdGenerator::new();

    let task = decode_task(
        json!({"id": null, "name": "x", "start": "2025-03-01", "end": "2025-03-01"}),
        &ids,
        1,
    )
    .unwrap();

    assert_that!(task.id, gt(0));
}

#[test]
fn given_bad_date_when_decoded_then_error_message() {
    let ids = TaskIdGenerator::new();

    let result = decode_task(
        json!({"name": "x", "start": "03/01/2025", "end": "2025-03-01"}),
        &ids,
        1,
    );

    assert_that!(result, err(anything()));
}

#[test]
fn given_non_object_when_decoded_then_error() {
    let ids = TaskIdGenerator::new();

    let result = decode_task(json!([1, 2, 3]), &ids, 1);

    assert_that!(result, err(eq("task must be a JSON object")));
}
