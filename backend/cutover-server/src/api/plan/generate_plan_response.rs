use cutover_core::{QuarantinedEntry, Task};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub tasks: Vec<Task>,
    pub quarantined: Vec<QuarantinedEntry>,
    pub applied: bool,
}
