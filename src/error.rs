//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Startup configuration problems. Reported before the server binds.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// An entity rule was broken. Raised by constructors and patch application,
/// always before anything reaches the database.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("{field} has the wrong type")]
    InvalidType { field: &'static str },
    #[error("{kind} {id} does not exist")]
    MissingReference { kind: &'static str, id: i64 },
    #[error("malformed body: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Carries the entity kind, e.g. `"Camper"`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    /// Camper creation reports its errors as a single string rather than a list.
    #[error("validation: {0}")]
    CamperValidation(ValidationError),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    /// Re-express a rejected camper request in the single-string error shape.
    pub fn for_camper(self) -> Self {
        match self {
            AppError::Validation(e) => AppError::CamperValidation(e),
            AppError::BadRequest(msg) => {
                AppError::CamperValidation(ValidationError::Malformed(msg))
            }
            other => other,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Path segments that do not parse as an id name no resource.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "unmatched path parameter");
        AppError::NotFound("Resource")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, json!({ "error": self.to_string() })),
            AppError::CamperValidation(e) => {
                tracing::warn!(error = %e, "rejected camper");
                (StatusCode::BAD_REQUEST, json!({ "errors": "validation errors" }))
            }
            AppError::Validation(e) => {
                tracing::warn!(error = %e, "rejected request");
                (StatusCode::BAD_REQUEST, json!({ "errors": ["validation errors"] }))
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "malformed request body");
                (StatusCode::BAD_REQUEST, json!({ "errors": ["validation errors"] }))
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
