use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Result type returned by persistence backends
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;

/// Failure of a backend to durably apply (or read) a change.
///
/// Absence of an entity on lookup is not an error; see `Repository::get_by_id`.
#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    /// Database driver or connectivity errors
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Update/delete targeted a row that no longer exists
    #[error("{entity} {id} does not exist")]
    MissingRow { entity: &'static str, id: i32 },

    /// Insert collided with an existing identifier
    #[error("{entity} {id} already exists")]
    DuplicateKey { entity: &'static str, id: i32 },

    /// Value rejected by the storage schema (e.g. column length)
    #[error("constraint violation: {0}")]
    Constraint(String),
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request did not carry a required identifier
    #[error("Missing identifier")]
    MissingId,

    /// Path identifier and payload identifier disagree
    #[error("Identifier mismatch: path {path}, payload {payload}")]
    IdMismatch { path: i32, payload: i32 },

    /// Model validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend failed to apply a change
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Persistence(PersistenceError::Database(err))
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        // Backend details stay in the logs
        let error_message = match self {
            AppError::Persistence(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingId => StatusCode::BAD_REQUEST,
            AppError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
