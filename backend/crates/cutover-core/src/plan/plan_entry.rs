use serde::{Deserialize, Serialize};

/// Identifier as the model wrote it. Models mix `3` and `"3"` freely, so both
/// forms are accepted and compared through [`PlanRef::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanRef {
    Number(i64),
    Text(String),
}

impl PlanRef {
    pub fn key(&self) -> String {
        match self {
            PlanRef::Number(n) => n.to_string(),
            PlanRef::Text(s) => s.trim().to_string(),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            PlanRef::Number(n) => Some(*n),
            PlanRef::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One task as proposed by the plan generator, before validation.
///
/// Everything the model may omit is optional here; [`crate::validate_plan`]
/// decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    #[serde(default)]
    pub id: Option<PlanRef>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<PlanRef>,
    #[serde(default)]
    pub parent_id: Option<PlanRef>,
}
