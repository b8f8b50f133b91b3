use cutover_core::TaskId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub description: String,
    /// Subtask mode: generated tasks without a parent attach here
    #[serde(default)]
    pub parent_id: Option<TaskId>,
    /// Append accepted tasks to the live collection
    #[serde(default)]
    pub apply: bool,
}
