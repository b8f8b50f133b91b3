use crate::PlanError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cutover_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cutover_db::DbError),

    #[error("Plan generator error: {0}")]
    Plan(#[from] PlanError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Metrics error: {message} {location}")]
    Metrics {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn metrics<S: Into<String>>(message: S) -> Self {
        Self::Metrics {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
