use cutover_core::TaskId;

use serde::{Deserialize, Serialize};

/// Every id removed, the requested task first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: Vec<TaskId>,
}
