//! Schema validation and id remapping for generated plans.
//!
//! Each proposed entry is either accepted as a [`Task`] with a fresh id or
//! quarantined with the reason it was rejected. Nothing is defaulted except
//! the fields that are optional by definition (`owner`, `type`, `status`,
//! `dependencies`).

use crate::{
    PlanEntry, PlanRef, Task, TaskId, TaskIdGenerator, TaskStatus, TaskType, parse_date,
};

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where the accepted tasks will land.
pub struct PlanContext<'a> {
    pub ids: &'a TaskIdGenerator,
    /// `order` for the first accepted task
    pub next_order: i64,
    /// Subtask mode: entries without a parent attach here
    pub parent: Option<TaskId>,
    /// Ids of live tasks; references to them survive remapping
    pub existing_ids: HashSet<TaskId>,
    pub max_tasks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarantinedEntry {
    pub index: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub tasks: Vec<Task>,
    pub quarantined: Vec<QuarantinedEntry>,
}

struct Accepted {
    index: usize,
    source_key: Option<String>,
    entry: PlanEntry,
    start: NaiveDate,
    end: NaiveDate,
    task_type: TaskType,
    status: TaskStatus,
}

pub fn validate_plan(items: Vec<Value>, context: &PlanContext<'_>) -> PlanOutcome {
    let mut outcome = PlanOutcome::default();
    let mut accepted = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        if accepted.len() >= context.max_tasks {
            outcome.quarantined.push(QuarantinedEntry {
                index,
                reason: format!("exceeds the limit of {} tasks", context.max_tasks),
            });
            continue;
        }

        match check_entry(index, item) {
            Ok(entry) => accepted.push(entry),
            Err(reason) => {
                log::debug!("Quarantined plan entry {index}: {reason}");
                outcome.quarantined.push(QuarantinedEntry { index, reason });
            }
        }
    }

    // Fresh ids first, so forward references resolve
    let mut fresh_ids: HashMap<String, TaskId> = HashMap::new();
    let assigned: Vec<TaskId> = accepted
        .iter()
        .map(|a| {
            let id = context.ids.next_id();
            if let Some(key) = &a.source_key {
                fresh_ids.entry(key.clone()).or_insert(id);
            }
            id
        })
        .collect();

    let resolve = |reference: &PlanRef| -> Option<TaskId> {
        fresh_ids.get(&reference.key()).copied().or_else(|| {
            reference
                .as_number()
                .filter(|n| context.existing_ids.contains(n))
        })
    };

    for (offset, (a, id)) in accepted.into_iter().zip(assigned).enumerate() {
        let mut dependencies: Vec<TaskId> = Vec::new();
        for dep in a.entry.dependencies.iter().filter_map(&resolve) {
            if dep != id && !dependencies.contains(&dep) {
                dependencies.push(dep);
            }
        }

        let parent_id = a
            .entry
            .parent_id
            .as_ref()
            .and_then(&resolve)
            .filter(|&pid| pid != id)
            .or(context.parent);

        outcome.tasks.push(Task {
            id,
            name: a.entry.name.unwrap_or_default().trim().to_string(),
            owner: a.entry.owner.unwrap_or_default().trim().to_string(),
            start: a.start,
            end: a.end,
            task_type: a.task_type,
            status: a.status,
            dependencies,
            order: context.next_order + offset as i64,
            parent_id,
            is_expanded: true,
        });

        log::trace!("Accepted plan entry {} as task {}", a.index, id);
    }

    outcome
}

fn check_entry(index: usize, item: Value) -> Result<Accepted, String> {
    let entry: PlanEntry =
        serde_json::from_value(item).map_err(|e| format!("not a task object: {e}"))?;

    if entry.name.as_deref().is_none_or(|n| n.trim().is_empty()) {
        return Err("name is required".to_string());
    }

    let start = required_date(entry.start.as_deref(), "start")?;
    let end = required_date(entry.end.as_deref(), "end")?;
    if end < start {
        return Err(format!("end {end} is before start {start}"));
    }

    let task_type = match entry.task_type.as_deref() {
        None => TaskType::default(),
        Some(value) => value
            .parse::<TaskType>()
            .map_err(|_| format!("unknown type '{value}'"))?,
    };
    let status = match entry.status.as_deref() {
        None => TaskStatus::default(),
        Some(value) => value
            .parse::<TaskStatus>()
            .map_err(|_| format!("unknown status '{value}'"))?,
    };

    Ok(Accepted {
        index,
        source_key: entry.id.as_ref().map(PlanRef::key),
        entry,
        start,
        end,
        task_type,
        status,
    })
}

fn required_date(value: Option<&str>, field: &str) -> Result<NaiveDate, String> {
    let value = value.ok_or_else(|| format!("{field} is required"))?;
    parse_date(value.trim()).map_err(|_| format!("{field} '{value}' is not a YYYY-MM-DD date"))
}
