#![allow(dead_code)]

use cutover_core::{Task, TaskId, TaskStatus, TaskType};

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// In-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    cutover_db::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

/// Creates a test Task with sensible defaults
pub fn create_test_task(id: TaskId, order: i64) -> Task {
    Task {
        id,
        name: format!("Task {id}"),
        owner: "Data Team".to_string(),
        start: date(3, 24),
        end: date(3, 28),
        task_type: TaskType::Preparation,
        status: TaskStatus::Todo,
        dependencies: Vec::new(),
        order,
        parent_id: None,
        is_expanded: true,
    }
}
