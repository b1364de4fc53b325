//! Todo CRUD handlers.
//!
//! Each handler validates its input, makes one repository call and wraps the
//! outcome in the shared envelope. Errors go through [`ApiError`].

use axum::{
    body::Bytes,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use todolist_core::todo::{
    validate_create, validate_update, ApiResponse, CreateTodoRequest, TodoId, TodoOperation,
    UpdateTodoRequest,
};

use crate::{handlers::ApiError, state::AppState};

/// Builds the success response for `operation`.
fn success<T: Serialize>(operation: TodoOperation, data: Option<T>) -> Response {
    let status = StatusCode::from_u16(operation.success_status()).unwrap_or(StatusCode::OK);
    let body = match data {
        Some(data) => ApiResponse::success(data, operation.success_message()),
        None => ApiResponse::message_only(operation.success_message()),
    };

    (status, Json(body)).into_response()
}

/// Create a new todo (POST /todos).
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    let new_todo = validate_create(payload)?;

    let todo = state
        .todo_repo
        .create_todo(&new_todo)
        .await
        .map_err(|e| ApiError::repository(TodoOperation::Create, e))?;

    tracing::info!(todo_id = todo.id, title = %todo.title, "Created new todo");

    Ok(success(TodoOperation::Create, Some(todo)))
}

/// List all todos ordered by id (GET /todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<Response, ApiError> {
    let todos = state
        .todo_repo
        .list_todos()
        .await
        .map_err(|e| ApiError::repository(TodoOperation::List, e))?;

    tracing::debug!(count = todos.len(), "Fetched todos");

    Ok(success(TodoOperation::List, Some(todos)))
}

/// Decodes a PATCH body. A missing or blank body is an empty patch.
fn decode_update(body: &[u8]) -> Result<UpdateTodoRequest, JsonRejection> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(UpdateTodoRequest::default());
    }
    let Json(payload) = Json::from_bytes(body)?;
    Ok(payload)
}

/// Partially update a todo (PATCH /todos/{id}).
///
/// Only the fields present in the body are written.
pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Path(id) = id?;
    let payload = decode_update(&body)?;
    let patch = validate_update(payload)?;

    let todo = state
        .todo_repo
        .update_todo(id, &patch)
        .await
        .map_err(|e| ApiError::repository(TodoOperation::Update, e))?;

    tracing::info!(todo_id = id, "Updated todo");

    Ok(success(TodoOperation::Update, Some(todo)))
}

/// Delete a todo (DELETE /todos/{id}).
pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<TodoId>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id?;

    state
        .todo_repo
        .delete_todo(id)
        .await
        .map_err(|e| ApiError::repository(TodoOperation::Delete, e))?;

    tracing::info!(todo_id = id, "Deleted todo");

    Ok(success::<()>(TodoOperation::Delete, None))
}
