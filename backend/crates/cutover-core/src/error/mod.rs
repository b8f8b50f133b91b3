use crate::{ErrorLocation, TaskId};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid task type: {value} {location}")]
    InvalidTaskType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date (expected YYYY-MM-DD): {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },

    #[error("Task {id} not found {location}")]
    TaskNotFound { id: TaskId, location: ErrorLocation },

    #[error("Task {id} already exists {location}")]
    TaskExists { id: TaskId, location: ErrorLocation },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: TaskId) -> Self {
        Self::TaskNotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
