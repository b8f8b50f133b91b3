//! Read-only diagnostics for advisory dependencies. Nothing here blocks
//! or reschedules a task.

use crate::{Task, TaskId};

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DependencyIssue {
    /// The predecessor id does not exist
    #[serde(rename_all = "camelCase")]
    UnknownPredecessor {
        task_id: TaskId,
        predecessor_id: TaskId,
    },
    /// The predecessor is still running on or after the day this task starts.
    /// Dates are inclusive, so ending on the start day counts.
    #[serde(rename_all = "camelCase")]
    Overlap {
        task_id: TaskId,
        predecessor_id: TaskId,
        predecessor_end: NaiveDate,
        task_start: NaiveDate,
    },
}

/// Dependencies that end on or after the dependent task's start, plus
/// dependencies on ids that are not in `tasks`.
pub fn dependency_violations(tasks: &[Task]) -> Vec<DependencyIssue> {
    let by_id: HashMap<TaskId, &Task> = tasks.iter().map(|t| (t.id, t)).collect();

    tasks
        .iter()
        .flat_map(|task| {
            task.dependencies
                .iter()
                .filter_map(|&pid| match by_id.get(&pid) {
                    None => Some(DependencyIssue::UnknownPredecessor {
                        task_id: task.id,
                        predecessor_id: pid,
                    }),
                    Some(pred) if pred.end >= task.start => Some(DependencyIssue::Overlap {
                        task_id: task.id,
                        predecessor_id: pid,
                        predecessor_end: pred.end,
                        task_start: task.start,
                    }),
                    Some(_) => None,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}
