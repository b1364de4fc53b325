//! Error responses for the todo handlers.
//!
//! [`ApiError::to_status_and_body`] is the pure mapping from an error to the
//! status code and JSON body sent to the client. Store error text is logged
//! server-side and replaced by a per-operation message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use todolist_core::storage::{repository_error_to_status_code, RepositoryError};
use todolist_core::todo::{
    ErrorResponse, TodoError, TodoOperation, DECODE_FAILURE_MESSAGE, NOT_FOUND_MESSAGE,
};

const INVALID_ID_MESSAGE: &str = "Invalid todo id";

#[derive(Debug)]
pub enum ApiError {
    /// Input rejected before the store is touched.
    Validation(String),
    /// The repository failed while running `operation`.
    Repository {
        operation: TodoOperation,
        error: RepositoryError,
    },
}

impl ApiError {
    pub fn repository(operation: TodoOperation, error: RepositoryError) -> Self {
        ApiError::Repository { operation, error }
    }

    /// Maps the error to its HTTP status code and response body.
    pub fn to_status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message.clone()))
            }
            ApiError::Repository { operation, error } => {
                let status = StatusCode::from_u16(repository_error_to_status_code(error))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = match error {
                    RepositoryError::NotFound { .. } => NOT_FOUND_MESSAGE.to_string(),
                    RepositoryError::NoFields => TodoError::NoFields.to_string(),
                    RepositoryError::InvalidData(_) if *operation == TodoOperation::List => {
                        DECODE_FAILURE_MESSAGE.to_string()
                    }
                    _ => operation.failure_message().to_string(),
                };
                (status, ErrorResponse::new(message))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_status_and_body();

        match &self {
            ApiError::Repository { operation, error } if error.is_persistence() => {
                tracing::error!(operation = ?operation, error = %error, "Repository error");
            }
            _ => {
                tracing::warn!(status = %status, message = %body.message, "API error");
            }
        }

        (status, Json(body)).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::Validation(INVALID_ID_MESSAGE.to_string())
    }
}
