//! API request types for todo operations.
//!
//! These mirror the JSON bodies accepted by the server. Validation lives in
//! [`super::operations`] so these stay plain data.

use serde::{Deserialize, Serialize};

/// Request payload for creating a todo (`POST /todos`).
///
/// Missing fields decode to their zero value, so a body without `title`
/// reaches validation as an empty title instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: bool,
}

impl CreateTodoRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Request payload for a partial update (`PATCH /todos/{id}`).
///
/// A field that is omitted or `null` is left untouched. A field that is present
/// is written, even when it holds the zero value (`""` or `false`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl UpdateTodoRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion status.
    pub fn with_status(mut self, status: bool) -> Self {
        self.status = Some(status);
        self
    }
}
