use crate::{CoreError, CoreResult, Task};

use std::cmp::Ordering;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Order,
    Start,
    End,
    Name,
    Owner,
    Status,
    Type,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Start => "start",
            Self::End => "end",
            Self::Name => "name",
            Self::Owner => "owner",
            Self::Status => "status",
            Self::Type => "type",
        }
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "order" => Ok(Self::Order),
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "name" => Ok(Self::Name),
            "owner" => Ok(Self::Owner),
            "status" => Ok(Self::Status),
            "type" => Ok(Self::Type),
            _ => Err(CoreError::Validation {
                message: format!("Unknown sort key: {s}"),
                field: Some("sort".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::Validation {
                message: format!("Unknown sort direction: {s}"),
                field: Some("direction".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare on the configured key only; ties stay `Equal` in both
    /// directions so a stable sort preserves input order.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = match self.key {
            SortKey::Order => a.order.cmp(&b.order),
            SortKey::Start => a.start.cmp(&b.start),
            SortKey::End => a.end.cmp(&b.end),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Owner => a.owner.to_lowercase().cmp(&b.owner.to_lowercase()),
            SortKey::Status => a.status.cmp(&b.status),
            SortKey::Type => a.task_type.cmp(&b.task_type),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Stable in-place sort (`slice::sort_by` is stable)
    pub fn sort(&self, tasks: &mut [&Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}
