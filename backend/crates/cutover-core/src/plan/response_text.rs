use crate::{CoreError, CoreResult};

use serde_json::Value;

/// Pull the task array out of a model reply.
///
/// Accepts a bare JSON array, an array inside a ``` fence (with or without a
/// language tag), or an object carrying the array under `tasks`.
pub fn extract_json_array(reply: &str) -> CoreResult<Vec<Value>> {
    let body = strip_fence(reply.trim());

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            // Prose around the array: fall back to the outermost brackets
            let (Some(open), Some(close)) = (body.find('['), body.rfind(']')) else {
                return Err(CoreError::validation(
                    "Plan reply does not contain a JSON array",
                    None,
                ));
            };
            if close < open {
                return Err(CoreError::validation(
                    "Plan reply does not contain a JSON array",
                    None,
                ));
            }
            serde_json::from_str(&body[open..=close])?
        }
    };

    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut object) => match object.remove("tasks") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(CoreError::validation(
                "Plan reply object has no `tasks` array",
                None,
            )),
        },
        _ => Err(CoreError::validation(
            "Plan reply is not a JSON array",
            None,
        )),
    }
}

fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Skip the language tag line
    let rest = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    rest.trim_end()
        .strip_suffix("```")
        .unwrap_or(rest)
        .trim()
}
