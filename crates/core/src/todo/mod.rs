mod error;
mod operations;
mod patch;
mod requests;
mod response;
mod types;

pub use error::TodoError;
pub use operations::{validate_create, validate_title, validate_update};
pub use patch::{FieldValue, TodoField, TodoPatch};
pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use response::{
    ApiResponse, ErrorResponse, TodoOperation, DECODE_FAILURE_MESSAGE, NOT_FOUND_MESSAGE,
};
pub use types::{NewTodo, Todo, TodoId};
