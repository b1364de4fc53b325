use async_trait::async_trait;

use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};

use super::Result;

/// Repository for todo operations.
///
/// Every method is a single round trip to the store.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<()>;

    /// Inserts a todo and returns it with its store-assigned id.
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo>;

    /// Lists every todo ordered by ascending id.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Applies the present fields of `patch` and returns the updated row.
    ///
    /// Fails with `NoFields` for an empty patch without touching the store,
    /// and with `NotFound` when no row has `id`.
    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo>;

    /// Deletes a todo. Fails with `NotFound` when no row has `id`.
    async fn delete_todo(&self, id: TodoId) -> Result<()>;
}
