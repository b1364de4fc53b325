//! Application state with repository-based storage.
//!
//! The shared state passed to every request handler. It carries the single
//! store handle as a repository trait object so handlers never touch SQLite
//! directly.

use std::sync::Arc;

use anyhow::Context;
use todolist_core::storage::TodoRepository;

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request handler; the repository itself is shared.
#[derive(Clone)]
pub struct AppState {
    /// Todo repository backed by the configured store.
    pub todo_repo: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates AppState around an existing repository.
    pub fn with_repository(todo_repo: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repo }
    }

    /// Creates AppState with SQLite storage.
    ///
    /// Opens the database, bootstraps the schema and pings it once. Any
    /// failure is returned so the caller can abort startup.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqliteRepository::connect(&config.db_path)
            .await
            .with_context(|| format!("Database connection failed ({})", config.db_path))?;

        Ok(Self::with_repository(Arc::new(repo)))
    }
}

#[cfg(test)]
pub mod testing {
    //! Test doubles for exercising handler error paths.

    use async_trait::async_trait;
    use todolist_core::storage::{RepositoryError, Result};
    use todolist_core::todo::{NewTodo, Todo, TodoId, TodoPatch};

    use super::*;

    /// Repository whose every call fails with a store-level error.
    #[derive(Debug, Default)]
    pub struct FailingRepository;

    fn broken() -> RepositoryError {
        RepositoryError::QueryFailed("disk I/O error: secret internals".to_string())
    }

    #[async_trait]
    impl TodoRepository for FailingRepository {
        async fn ping(&self) -> Result<()> {
            Err(RepositoryError::ConnectionFailed("database is locked".to_string()))
        }

        async fn create_todo(&self, _todo: &NewTodo) -> Result<Todo> {
            Err(broken())
        }

        async fn list_todos(&self) -> Result<Vec<Todo>> {
            Err(broken())
        }

        async fn update_todo(&self, _id: TodoId, _patch: &TodoPatch) -> Result<Todo> {
            Err(broken())
        }

        async fn delete_todo(&self, _id: TodoId) -> Result<()> {
            Err(broken())
        }
    }

    impl AppState {
        /// AppState backed by a fresh in-memory SQLite database.
        pub async fn in_memory() -> Self {
            let repo = SqliteRepository::new_in_memory()
                .await
                .expect("in-memory database should open");
            Self::with_repository(Arc::new(repo))
        }

        /// AppState whose repository always fails.
        pub fn failing() -> Self {
            Self::with_repository(Arc::new(FailingRepository))
        }
    }
}
