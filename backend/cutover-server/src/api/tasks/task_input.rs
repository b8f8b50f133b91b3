use cutover_core::{Task, TaskIdGenerator};

use serde_json::{Value, json};

/// Decode one task from a request body.
///
/// A missing or null `id` is minted from `ids`; a missing `order` becomes
/// `next_order`. Explicit ids are recorded so later minted ids stay above them.
pub fn decode_task(mut value: Value, ids: &TaskIdGenerator, next_order: i64) -> Result<Task, String> {
    let Value::Object(object) = &mut value else {
        return Err("task must be a JSON object".to_string());
    };

    if object.get("id").is_none_or(Value::is_null) {
        object.insert("id".to_string(), json!(ids.next_id()));
    }
    if !object.contains_key("order") {
        object.insert("order".to_string(), json!(next_order));
    }

    let task: Task = serde_json::from_value(value).map_err(|e| e.to_string())?;
    ids.observe(task.id);
    Ok(task)
}
