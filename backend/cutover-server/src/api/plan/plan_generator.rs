use crate::PlanError;

use async_trait::async_trait;

/// Source of raw plan text. Parsing and validation happen in the caller,
/// so any backend only has to return what the model said.
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, PlanError>;
}
