use super::error::TodoError;
use super::patch::TodoPatch;
use super::requests::{CreateTodoRequest, UpdateTodoRequest};
use super::types::NewTodo;

/// Validates a todo title. Only the empty string is rejected.
pub fn validate_title(title: &str) -> Result<(), TodoError> {
    if title.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    Ok(())
}

/// Validates a create request and turns it into a [`NewTodo`].
pub fn validate_create(request: CreateTodoRequest) -> Result<NewTodo, TodoError> {
    validate_title(&request.title)?;

    Ok(NewTodo {
        title: request.title,
        description: request.description,
        status: request.status,
    })
}

/// Validates an update request and turns it into a [`TodoPatch`].
///
/// Fails with [`TodoError::NoFields`] when nothing is present, and with
/// [`TodoError::EmptyTitle`] when the title is present but empty.
pub fn validate_update(request: UpdateTodoRequest) -> Result<TodoPatch, TodoError> {
    let patch = TodoPatch {
        title: request.title,
        description: request.description,
        status: request.status,
    };

    if patch.is_empty() {
        return Err(TodoError::NoFields);
    }
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }

    Ok(patch)
}
