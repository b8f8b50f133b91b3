use crate::models::dates::iso_date;
use crate::{TaskId, TaskStatus, TaskType};

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const NEW_TASK_NAME: &str = "New Task";

/// A single row of the cutover plan.
///
/// `dependencies` are advisory predecessors and `parent_id` forms an
/// unenforced forest: either may point at ids that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub owner: String,

    // Schedule (inclusive range)
    #[serde(with = "iso_date")]
    pub start: NaiveDate,
    #[serde(with = "iso_date")]
    pub end: NaiveDate,

    #[serde(rename = "type", default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    #[serde(default)]
    pub order: i64,

    // Hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
    #[serde(default = "default_expanded")]
    pub is_expanded: bool,
}

fn default_expanded() -> bool {
    true
}

impl Task {
    /// Create a task with the defaults used by the "add task" action:
    /// starts `today`, ends the following day.
    pub fn new(id: TaskId, name: impl Into<String>, today: NaiveDate, order: i64) -> Self {
        Self {
            id,
            name: name.into(),
            owner: String::new(),
            start: today,
            end: today.checked_add_days(Days::new(1)).unwrap_or(today),
            task_type: TaskType::default(),
            status: TaskStatus::default(),
            dependencies: Vec::new(),
            order,
            parent_id: None,
            is_expanded: true,
        }
    }

    pub fn with_parent(mut self, parent_id: Option<TaskId>) -> Self {
        self.parent_id = parent_id;
        self
    }

    /// Inclusive length in days; never less than one.
    pub fn duration_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(1)
    }

    /// Order value that places a new task after every existing one
    pub fn next_order(tasks: &[Task]) -> i64 {
        tasks.iter().map(|t| t.order).max().map_or(1, |max| max + 1)
    }
}
