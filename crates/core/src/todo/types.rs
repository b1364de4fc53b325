use serde::{Deserialize, Serialize};

/// Store-assigned primary key of a todo.
pub type TodoId = i64;

/// A persisted todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    /// `true` once the todo is completed.
    pub status: bool,
}

/// A validated todo that has not been persisted yet.
///
/// The store assigns the id on insert, so this type has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub status: bool,
}

impl NewTodo {
    /// Creates a new incomplete todo with an empty description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: false,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the completion status.
    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    /// Attaches the store-assigned id, producing the persisted entity.
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_defaults() {
        let todo = NewTodo::new("Buy milk");

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert!(!todo.status);
    }

    #[test]
    fn test_into_todo_keeps_fields() {
        let todo = NewTodo::new("Buy milk")
            .with_description("2 liters")
            .with_status(true)
            .into_todo(7);

        assert_eq!(
            todo,
            Todo {
                id: 7,
                title: "Buy milk".to_string(),
                description: "2 liters".to_string(),
                status: true,
            }
        );
    }

    #[test]
    fn test_todo_serializes_all_fields() {
        let todo = NewTodo::new("Read").into_todo(1);
        let json = serde_json::to_value(&todo).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "title": "Read",
                "description": "",
                "status": false
            })
        );
    }
}
