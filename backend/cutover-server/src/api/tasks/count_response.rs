use serde::{Deserialize, Serialize};

/// Number of tasks written or removed by a bulk operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}
