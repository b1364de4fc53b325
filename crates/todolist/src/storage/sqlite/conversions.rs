//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::{types::Value, Row};
use todolist_core::todo::{FieldValue, Todo};

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, title, description, status
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
    })
}

/// Convert a patched field value to a bindable SQLite value.
pub fn field_value_to_sql(value: FieldValue) -> Value {
    match value {
        FieldValue::Text(text) => Value::Text(text),
        FieldValue::Bool(flag) => Value::Integer(i64::from(flag)),
    }
}
