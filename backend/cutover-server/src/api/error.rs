//! REST API error types
//!
//! Every failure leaves the handler as `{ "error": { code, message, field? } }`
//! with a matching HTTP status.

use crate::PlanError;

use cutover_core::CoreError;
use cutover_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 502, the plan generator failed
    #[error("Upstream failure: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND".into(),
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::BadGateway { message, .. } => ApiErrorBody {
                code: "BAD_GATEWAY".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            CoreError::TaskNotFound { id, .. } => ApiError::NotFound {
                message: format!("Task {} not found", id),
                location,
            },
            CoreError::TaskExists { id, .. } => ApiError::Validation {
                message: format!("Task {} already exists", id),
                field: Some("id".into()),
                location,
            },
            CoreError::InvalidTaskType { value, .. } => ApiError::Validation {
                message: format!("Invalid task type: {}", value),
                field: Some("type".into()),
                location,
            },
            CoreError::InvalidTaskStatus { value, .. } => ApiError::Validation {
                message: format!("Invalid task status: {}", value),
                field: Some("status".into()),
                location,
            },
            CoreError::InvalidDate { value, .. } => ApiError::Validation {
                message: format!("Invalid date (expected YYYY-MM-DD): {}", value),
                field: None,
                location,
            },
            CoreError::Json { source, .. } => ApiError::BadRequest {
                message: format!("Invalid JSON: {}", source),
                location,
            },
        }
    }
}

/// Database details never reach the client
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location,
            },
            DbError::InvalidData { .. } => ApiError::Internal {
                message: "Stored data is corrupt".to_string(),
                location,
            },
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location,
            },
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<PlanError> for ApiError {
    #[track_caller]
    fn from(e: PlanError) -> Self {
        ApiError::BadGateway {
            message: format!("Plan generation failed: {}", e.summary()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
