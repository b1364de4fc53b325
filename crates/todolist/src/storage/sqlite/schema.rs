//! SQLite schema definitions and SQL statements.
//!
//! Static statements are constants. The partial update statement is assembled
//! from column names only; every value goes through a numbered placeholder.

use todolist_core::todo::TodoField;

/// SQL statement to create the todos table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    status INTEGER NOT NULL DEFAULT 0
);
"#;

pub const PING: &str = "SELECT 1";

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, description, status)
VALUES (?1, ?2, ?3)
RETURNING id
"#;

pub const SELECT_ALL_TODOS: &str = r#"
SELECT id, title, description, status
FROM todos
ORDER BY id ASC
"#;

pub const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";

const RETURNING_TODO: &str = "RETURNING id, title, description, status";

/// Builds the partial update statement for the given fields.
///
/// Each field becomes `column = ?N` with N counting from 1 in the order given;
/// the id is bound to the last placeholder. Returns `None` when `fields` is
/// empty since there is nothing to set.
pub fn update_todo_sql(fields: &[TodoField]) -> Option<String> {
    if fields.is_empty() {
        return None;
    }

    let assignments: Vec<String> = fields
        .iter()
        .enumerate()
        .map(|(idx, field)| format!("{} = ?{}", field.column(), idx + 1))
        .collect();

    Some(format!(
        "UPDATE todos SET {} WHERE id = ?{} {RETURNING_TODO}",
        assignments.join(", "),
        fields.len() + 1
    ))
}
