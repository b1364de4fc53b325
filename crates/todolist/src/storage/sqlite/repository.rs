//! SQLite repository implementation.
//!
//! Implements `TodoRepository` from `todolist_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use tokio_rusqlite::Connection;

use todolist_core::storage::{RepositoryError, Result, TodoRepository};
use todolist_core::todo::{NewTodo, Todo, TodoField, TodoId, TodoPatch};

use super::conversions::{field_value_to_sql, row_to_todo};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

const ENTITY: &str = "Todo";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Holds the single store handle. Statements run on the connection's own
/// thread, so the repository can be shared across concurrent requests.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Opens the database at `path` and verifies it answers a ping.
    pub async fn connect(path: &str) -> Result<Self> {
        let repo = Self::new(path).await?;
        repo.ping().await?;

        tracing::debug!(path = %path, "Connected to SQLite database");

        Ok(repo)
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }
}

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo> {
        let title = todo.title.clone();
        let description = todo.description.clone();
        let status = todo.status;

        let id = self
            .conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_TODO,
                    rusqlite::params![title, description, status],
                    |row| row.get::<_, TodoId>(0),
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))?;

        Ok(todo.clone().into_todo(id))
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                // The first undecodable row aborts the whole listing
                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY))
    }

    async fn update_todo(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo> {
        let (fields, mut values): (Vec<TodoField>, Vec<_>) = patch
            .fields()
            .into_iter()
            .map(|(field, value)| (field, field_value_to_sql(value)))
            .unzip();

        let sql = schema::update_todo_sql(&fields).ok_or(RepositoryError::NoFields)?;
        values.push(rusqlite::types::Value::Integer(id));

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let todo = stmt
                    .query_row(params_from_iter(values), row_to_todo)
                    .map_err(wrap_err)?;
                Ok(todo)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }

    async fn delete_todo(&self, id: TodoId) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_TODO, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, ENTITY, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteRepository {
        SqliteRepository::new_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let repo = repo().await;

        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_assigns_positive_id_and_echoes_input() {
        let repo = repo().await;
        let new = NewTodo::new("Buy milk")
            .with_description("semi-skimmed")
            .with_status(true);

        let todo = repo.create_todo(&new).await.unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "semi-skimmed");
        assert!(todo.status);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let repo = repo().await;

        let todos = repo.list_todos().await.unwrap();

        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_by_ascending_id() {
        let repo = repo().await;
        for title in ["first", "second", "third"] {
            repo.create_todo(&NewTodo::new(title)).await.unwrap();
        }

        let todos = repo.list_todos().await.unwrap();

        assert_eq!(todos.len(), 3);
        assert!(todos.windows(2).all(|pair| pair[0].id <= pair[1].id));
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_aborts_on_undecodable_row() {
        let repo = repo().await;
        repo.create_todo(&NewTodo::new("fine")).await.unwrap();
        repo.conn
            .call(|conn| {
                conn.execute(
                    "INSERT INTO todos (title, description, status) VALUES ('bad', X'FF', 0)",
                    [],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .unwrap();

        let result = repo.list_todos().await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_update_changes_only_present_fields() {
        let repo = repo().await;
        let created = repo
            .create_todo(&NewTodo::new("Buy milk").with_description("2 liters"))
            .await
            .unwrap();
        let patch = TodoPatch {
            status: Some(true),
            ..Default::default()
        };

        let updated = repo.update_todo(created.id, &patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2 liters");
        assert!(updated.status);
    }

    #[tokio::test]
    async fn test_update_to_zero_values_round_trips() {
        let repo = repo().await;
        let created = repo
            .create_todo(
                &NewTodo::new("Buy milk")
                    .with_description("2 liters")
                    .with_status(true),
            )
            .await
            .unwrap();
        let patch = TodoPatch {
            title: Some("Buy oat milk".to_string()),
            description: Some(String::new()),
            status: Some(false),
        };

        repo.update_todo(created.id, &patch).await.unwrap();
        let stored = repo.list_todos().await.unwrap();

        assert_eq!(
            stored,
            vec![Todo {
                id: created.id,
                title: "Buy oat milk".to_string(),
                description: String::new(),
                status: false,
            }]
        );
    }

    #[tokio::test]
    async fn test_update_with_current_values_still_succeeds() {
        let repo = repo().await;
        let created = repo.create_todo(&NewTodo::new("Buy milk")).await.unwrap();
        let patch = TodoPatch {
            title: Some("Buy milk".to_string()),
            description: Some(String::new()),
            status: Some(false),
        };

        let updated = repo.update_todo(created.id, &patch).await;

        assert_eq!(updated, Ok(created.clone()));
        assert_eq!(repo.list_todos().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_empty_patch_fails_without_mutation() {
        let repo = repo().await;
        let created = repo.create_todo(&NewTodo::new("Buy milk")).await.unwrap();

        let result = repo.update_todo(created.id, &TodoPatch::default()).await;

        assert_eq!(result, Err(RepositoryError::NoFields));
        assert_eq!(repo.list_todos().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_nonexistent_id_is_not_found() {
        let repo = repo().await;
        let patch = TodoPatch {
            title: Some("ghost".to_string()),
            ..Default::default()
        };

        let result = repo.update_todo(404, &patch).await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                entity_type: "Todo",
                id: "404".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_patch_values_are_bound_not_interpolated() {
        let repo = repo().await;
        let created = repo.create_todo(&NewTodo::new("safe")).await.unwrap();
        let hostile = "x'; DROP TABLE todos; --".to_string();
        let patch = TodoPatch {
            title: Some(hostile.clone()),
            ..Default::default()
        };

        let updated = repo.update_todo(created.id, &patch).await.unwrap();

        assert_eq!(updated.title, hostile);
        assert_eq!(repo.list_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let created = repo.create_todo(&NewTodo::new("Buy milk")).await.unwrap();

        repo.delete_todo(created.id).await.unwrap();

        assert!(repo.list_todos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_id_is_not_found_and_keeps_rows() {
        let repo = repo().await;
        repo.create_todo(&NewTodo::new("keep me")).await.unwrap();

        let result = repo.delete_todo(999).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert_eq!(repo.list_todos().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = repo().await;
        let created = repo.create_todo(&NewTodo::new("once")).await.unwrap();

        repo.delete_todo(created.id).await.unwrap();
        let result = repo.delete_todo(created.id).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_connect_fails_for_unopenable_path() {
        let result = SqliteRepository::connect("/nonexistent-dir/for/todolist/todos.db").await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
