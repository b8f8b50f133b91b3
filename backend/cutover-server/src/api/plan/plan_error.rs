use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("HTTP request failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Model endpoint returned {status}: {body} {location}")]
    Status {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Model reply was empty {location}")]
    EmptyReply { location: ErrorLocation },

    #[error("Model reply was not usable: {message} {location}")]
    InvalidReply {
        message: String,
        location: ErrorLocation,
    },
}

impl PlanError {
    #[track_caller]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_reply() -> Self {
        Self::EmptyReply {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_reply<S: Into<String>>(message: S) -> Self {
        Self::InvalidReply {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Client-facing description, without source locations
    pub fn summary(&self) -> String {
        match self {
            PlanError::Http { source, .. } if source.is_timeout() => {
                "model endpoint timed out".to_string()
            }
            PlanError::Http { .. } => "model endpoint unreachable".to_string(),
            PlanError::Status { status, .. } => format!("model endpoint returned {status}"),
            PlanError::EmptyReply { .. } => "model reply was empty".to_string(),
            PlanError::InvalidReply { message, .. } => message.clone(),
        }
    }
}

impl From<reqwest::Error> for PlanError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
