use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the record store and returned as-is by the handlers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Duplicate `employee_id` or `email`.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Input the storage constraints would reject, e.g. an unknown attendance status.
    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn employee_not_found() -> Self {
        StoreError::NotFound("Employee not found".to_string())
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Conflict(_) | StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            StoreError::Database(e) => {
                tracing::error!(error = %e, "Store operation failed");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}
