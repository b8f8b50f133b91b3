//! Flat task collection + UI filter/sort state -> ordered, indented rows.
//!
//! The same row sequence drives the list panel (indentation, expand
//! affordance) and the timeline (row `i` of the list is bar row `i`).

use crate::{SortConfig, Task, TaskFilters, TaskForest, TaskId};

use std::collections::HashSet;

use serde::Serialize;

/// One render-ready row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRow<'a> {
    pub task: &'a Task,
    /// 0 for roots
    pub depth: usize,
    /// Has at least one child that survived filtering
    pub has_children: bool,
}

/// Build the row sequence.
///
/// 1. Keep tasks matching every filter
/// 2. Index children within the filtered set only
/// 3. Roots: no parent, parent filtered out or missing, or on a parent cycle
/// 4. Depth-first emit; each sibling group sorted by `sort`; children only
///    below expanded parents
pub fn build_view_model<'a>(
    tasks: &'a [Task],
    filters: &TaskFilters,
    sort: &SortConfig,
) -> Vec<ViewRow<'a>> {
    let filtered: Vec<&'a Task> = tasks.iter().filter(|t| filters.matches(t)).collect();
    if filtered.is_empty() {
        return Vec::new();
    }

    let forest = TaskForest::build(&filtered);

    let mut roots = forest.roots().to_vec();
    sort.sort(&mut roots);

    let mut rows = Vec::with_capacity(filtered.len());
    let mut descended = HashSet::new();
    for root in roots {
        flatten(root, 0, &forest, sort, &mut descended, &mut rows);
    }

    log::trace!(
        "Built view model: {} of {} tasks visible",
        rows.len(),
        tasks.len()
    );

    rows
}

fn flatten<'a>(
    task: &'a Task,
    depth: usize,
    forest: &TaskForest<'a>,
    sort: &SortConfig,
    descended: &mut HashSet<TaskId>,
    rows: &mut Vec<ViewRow<'a>>,
) {
    let children = forest.children(task.id);
    rows.push(ViewRow {
        task,
        depth,
        has_children: !children.is_empty(),
    });

    // A duplicated id must not replay the same subtree twice
    if !task.is_expanded || children.is_empty() || !descended.insert(task.id) {
        return;
    }

    let mut children = children.to_vec();
    sort.sort(&mut children);
    for child in children {
        flatten(child, depth + 1, forest, sort, descended, rows);
    }
}

/// Set every task's expansion flag
pub fn set_all_expanded(tasks: &mut [Task], expanded: bool) {
    for task in tasks.iter_mut() {
        task.is_expanded = expanded;
    }
}

/// The collection with every subtree open
pub fn expand_all(mut tasks: Vec<Task>) -> Vec<Task> {
    set_all_expanded(&mut tasks, true);
    tasks
}

/// The collection with every subtree closed
pub fn collapse_all(mut tasks: Vec<Task>) -> Vec<Task> {
    set_all_expanded(&mut tasks, false);
    tasks
}

/// Flip one task's expansion flag; returns the updated task if found
pub fn toggle_expanded(tasks: &[Task], id: TaskId) -> Option<Task> {
    tasks.iter().find(|t| t.id == id).map(|t| {
        let mut updated = t.clone();
        updated.is_expanded = !updated.is_expanded;
        updated
    })
}
