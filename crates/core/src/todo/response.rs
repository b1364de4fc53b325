//! The JSON envelope returned by every todo endpoint.
//!
//! Success bodies look like `{"status":"success","data":...,"message":...}`
//! (`data` omitted when there is nothing to return); failures are
//! `{"message":...}`.

use serde::{Deserialize, Serialize};

/// Message sent when an operation targets an id that does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Todo not found";

/// Message sent when stored rows cannot be decoded while listing.
pub const DECODE_FAILURE_MESSAGE: &str = "Failed to process data";

const SUCCESS: &str = "success";

/// Success envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Success envelope carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            data: Some(data),
            message: message.into(),
        }
    }

    /// Success envelope without a payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: SUCCESS.to_string(),
            data: None,
            message: message.into(),
        }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The four todo operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOperation {
    Create,
    List,
    Update,
    Delete,
}

impl TodoOperation {
    /// HTTP status code returned on success.
    pub fn success_status(self) -> u16 {
        match self {
            TodoOperation::Create => 201,
            TodoOperation::List | TodoOperation::Update | TodoOperation::Delete => 200,
        }
    }

    /// Message placed in the success envelope.
    pub fn success_message(self) -> &'static str {
        match self {
            TodoOperation::Create => "Todo created successfully",
            TodoOperation::List => "Todos fetched successfully",
            TodoOperation::Update => "Todo updated successfully",
            TodoOperation::Delete => "Todo deleted successfully",
        }
    }

    /// Generic message sent to the client when the store fails.
    ///
    /// Store error text is logged server-side and never included here.
    pub fn failure_message(self) -> &'static str {
        match self {
            TodoOperation::Create => "Failed to create todo",
            TodoOperation::List => "Failed to fetch todos",
            TodoOperation::Update => "Failed to update todo",
            TodoOperation::Delete => "Failed to delete todo",
        }
    }
}
