//! Point-in-time copies of the whole task collection.

use crate::{CoreError, CoreResult, Task};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Export/import document: `{ id?, name, createdAt, tasks }`.
/// `tasks` has exactly the shape of the live collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

/// Listing entry, without the task payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub task_count: usize,
}

/// Loosely typed envelope so a bad task can be reported by index
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument {
    #[serde(default)]
    id: Option<i64>,
    name: String,
    created_at: DateTime<Utc>,
    tasks: Vec<serde_json::Value>,
}

impl Snapshot {
    /// Deep copy of `tasks` taken now
    pub fn capture(name: impl Into<String>, tasks: &[Task]) -> Self {
        Self {
            id: None,
            name: name.into(),
            created_at: Utc::now(),
            tasks: tasks.to_vec(),
        }
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            task_count: self.tasks.len(),
        }
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate an exported document.
    ///
    /// Every task must conform; the first bad one rejects the whole document.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        let document: SnapshotDocument = serde_json::from_value(value)?;
        Self::from_document(document)
    }

    fn from_document(document: SnapshotDocument) -> CoreResult<Self> {
        if document.name.trim().is_empty() {
            return Err(CoreError::validation(
                "Snapshot name cannot be empty",
                Some("name"),
            ));
        }

        let tasks = document
            .tasks
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<Task>(value).map_err(|e| {
                    CoreError::validation(format!("tasks[{index}]: {e}"), Some("tasks"))
                })
            })
            .collect::<CoreResult<Vec<_>>>()?;

        ensure_unique_ids(&tasks)?;

        Ok(Self {
            id: document.id,
            name: document.name,
            created_at: document.created_at,
            tasks,
        })
    }
}

/// Reject collections where two tasks share an id
pub fn ensure_unique_ids(tasks: &[Task]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for (index, task) in tasks.iter().enumerate() {
        if !seen.insert(task.id) {
            return Err(CoreError::validation(
                format!("tasks[{index}]: duplicate task id {}", task.id),
                Some("tasks"),
            ));
        }
    }
    Ok(())
}
