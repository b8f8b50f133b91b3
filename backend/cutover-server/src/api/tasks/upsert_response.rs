use cutover_core::TaskId;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertResponse {
    pub id: TaskId,
}
