//! Tree semantics overlaid on the flat task collection.
//!
//! `parent_id` links are not validated anywhere, so this module treats them
//! defensively:
//! 1. A link to an id that is not in the collection is ignored (the task is a root)
//! 2. Tasks whose parent chain loops back to themselves are cyclic; their link
//!    is cut and they become roots
//!
//! After both rules the effective parent graph is a forest, so every walk
//! over it terminates.

use crate::{Task, TaskId};

use std::collections::{HashMap, HashSet, VecDeque};

/// Parent/child index over a (possibly filtered) set of tasks.
pub struct TaskForest<'a> {
    roots: Vec<&'a Task>,
    children_of: HashMap<TaskId, Vec<&'a Task>>,
}

impl<'a> TaskForest<'a> {
    /// Build the index. Children keep the relative order of `tasks`.
    pub fn build(tasks: &[&'a Task]) -> Self {
        let present: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
        let cyclic = cyclic_task_ids(tasks);

        let mut roots = Vec::new();
        let mut children_of: HashMap<TaskId, Vec<&'a Task>> = HashMap::new();

        for &task in tasks {
            match effective_parent(task, &present, &cyclic) {
                Some(pid) => children_of.entry(pid).or_default().push(task),
                None => roots.push(task),
            }
        }

        Self { roots, children_of }
    }

    pub fn roots(&self) -> &[&'a Task] {
        &self.roots
    }

    pub fn children(&self, id: TaskId) -> &[&'a Task] {
        self.children_of.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_children(&self, id: TaskId) -> bool {
        !self.children(id).is_empty()
    }
}

fn effective_parent(
    task: &Task,
    present: &HashSet<TaskId>,
    cyclic: &HashSet<TaskId>,
) -> Option<TaskId> {
    let pid = task.parent_id?;
    if cyclic.contains(&task.id) || !present.contains(&pid) {
        return None;
    }
    Some(pid)
}

/// Ids of tasks that are their own ancestor within `tasks`.
///
/// Only tasks ON a loop are reported; a task hanging below a loop is not.
pub fn cyclic_task_ids(tasks: &[&Task]) -> HashSet<TaskId> {
    let present: HashSet<TaskId> = tasks.iter().map(|t| t.id).collect();
    let parent_of: HashMap<TaskId, TaskId> = tasks
        .iter()
        .filter_map(|t| {
            t.parent_id
                .filter(|pid| present.contains(pid))
                .map(|pid| (t.id, pid))
        })
        .collect();

    let mut cyclic = HashSet::new();

    for &start in parent_of.keys() {
        let mut visited = HashSet::new();
        let mut current = start;

        while let Some(&pid) = parent_of.get(&current) {
            if pid == start {
                cyclic.insert(start);
                break;
            }
            if !visited.insert(pid) {
                break; // Loop above us that does not include `start`
            }
            current = pid;
        }
    }

    cyclic
}

/// Ids removed by a cascading delete of `id`: the task first, then every
/// descendant reachable through `parent_id` links, breadth first.
///
/// Returns an empty list when `id` is not in the collection.
pub fn collect_descendants(tasks: &[Task], id: TaskId) -> Vec<TaskId> {
    if !tasks.iter().any(|t| t.id == id) {
        return Vec::new();
    }

    let mut children_of: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
    for task in tasks {
        if let Some(pid) = task.parent_id {
            children_of.entry(pid).or_default().push(task.id);
        }
    }

    let mut collected = vec![id];
    let mut visited = HashSet::from([id]);
    let mut queue = VecDeque::from([id]);

    while let Some(current) = queue.pop_front() {
        for &child in children_of.get(&current).into_iter().flatten() {
            if visited.insert(child) {
                collected.push(child);
                queue.push_back(child);
            }
        }
    }

    collected
}

/// Remove `id` and all its descendants from `tasks`, returning the removed ids.
pub fn remove_with_descendants(tasks: &mut Vec<Task>, id: TaskId) -> Vec<TaskId> {
    let doomed = collect_descendants(tasks, id);
    if !doomed.is_empty() {
        let doomed_set: HashSet<TaskId> = doomed.iter().copied().collect();
        tasks.retain(|t| !doomed_set.contains(&t.id));
    }
    doomed
}
