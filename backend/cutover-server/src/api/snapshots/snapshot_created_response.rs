use cutover_core::SnapshotSummary;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCreatedResponse {
    pub snapshot: SnapshotSummary,
}
