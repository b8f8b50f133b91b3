use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Category of a cutover task. Presentational only: drives bar color and label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum TaskType {
    #[default]
    #[serde(rename = "prep")]
    Preparation,
    #[serde(rename = "cutover")]
    Cutover,
    #[serde(rename = "upstream")]
    UpstreamIntegration,
    #[serde(rename = "downstream")]
    DownstreamIntegration,
    #[serde(rename = "milestone")]
    Milestone,
}

impl TaskType {
    pub const ALL: [TaskType; 5] = [
        Self::Preparation,
        Self::Cutover,
        Self::UpstreamIntegration,
        Self::DownstreamIntegration,
        Self::Milestone,
    ];

    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preparation => "prep",
            Self::Cutover => "cutover",
            Self::UpstreamIntegration => "upstream",
            Self::DownstreamIntegration => "downstream",
            Self::Milestone => "milestone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Preparation => "Preparation",
            Self::Cutover => "Cutover",
            Self::UpstreamIntegration => "Upstream Integration",
            Self::DownstreamIntegration => "Downstream Integration",
            Self::Milestone => "Milestone",
        }
    }

    /// Bar color as a CSS hex string
    pub fn color(&self) -> &'static str {
        match self {
            Self::Preparation => "#3b82f6",
            Self::Cutover => "#ef4444",
            Self::UpstreamIntegration => "#8b5cf6",
            Self::DownstreamIntegration => "#10b981",
            Self::Milestone => "#f59e0b",
        }
    }
}

impl FromStr for TaskType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "prep" => Ok(Self::Preparation),
            "cutover" => Ok(Self::Cutover),
            "upstream" => Ok(Self::UpstreamIntegration),
            "downstream" => Ok(Self::DownstreamIntegration),
            "milestone" => Ok(Self::Milestone),
            _ => Err(CoreError::InvalidTaskType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
