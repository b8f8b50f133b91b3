use crate::{Task, TaskStatus, TaskType};

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

pub const WILDCARD: &str = "all";

/// A single filter predicate: the wildcard `"all"` or one exact value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WILDCARD {
            return Ok(Self::All);
        }
        T::from_str(s).map(Self::Only)
    }
}

impl<T: Display> Serialize for Filter<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::All => serializer.serialize_str(WILDCARD),
            Self::Only(value) => serializer.collect_str(value),
        }
    }
}

impl<'de, T> Deserialize<'de> for Filter<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Filter::from_str(&s).map_err(de::Error::custom)
    }
}

/// The three list filters. Predicates are ANDed; `All` is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilters {
    #[serde(rename = "type")]
    pub task_type: Filter<TaskType>,
    pub owner: Filter<String>,
    pub status: Filter<TaskStatus>,
}

impl TaskFilters {
    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Filter::Only(task_type);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Filter::Only(owner.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Filter::Only(status);
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.task_type.matches(&task.task_type)
            && self.owner.matches(&task.owner)
            && self.status.matches(&task.status)
    }
}
