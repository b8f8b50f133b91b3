use crate::{Task, TaskStatus, TaskType, format_date};

use chrono::NaiveDate;

pub const SYSTEM_PROMPT: &str = "You plan data-migration cutovers. \
Reply with a JSON array only, no prose. Each element is an object with the keys \
id (integer), name, owner, start, end, type, status, dependencies (array of ids) \
and optionally parentId (id of another element in the array).";

/// User prompt for a fresh plan, or for subtasks of `parent` when given.
pub fn build_prompt(description: &str, parent: Option<&Task>, today: NaiveDate) -> String {
    let types: Vec<&str> = TaskType::ALL.iter().map(|t| t.as_str()).collect();
    let statuses: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();

    let mut prompt = String::new();

    match parent {
        Some(parent) => prompt.push_str(&format!(
            "Break the task \"{}\" ({} to {}) into subtasks.\n",
            parent.name,
            format_date(parent.start),
            format_date(parent.end),
        )),
        None => prompt.push_str("Produce a cutover plan.\n"),
    }

    prompt.push_str(&format!("Description: {}\n", description.trim()));
    prompt.push_str(&format!(
        "Dates use the format YYYY-MM-DD (today is {}).\n",
        format_date(today),
    ));
    prompt.push_str(&format!("type is one of: {}.\n", types.join(", ")));
    prompt.push_str(&format!("status is one of: {}.\n", statuses.join(", ")));

    prompt
}
