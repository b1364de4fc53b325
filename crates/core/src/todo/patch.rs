//! Sparse update patches.
//!
//! A [`TodoPatch`] records which fields a caller asked to change. The storage
//! layer turns it into ordered `(field, value)` pairs and derives the statement
//! shape from the field names alone; values are always bound, never formatted
//! into SQL.

/// A mutable column of the `todos` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoField {
    Title,
    Description,
    Status,
}

impl TodoField {
    /// Column name in the `todos` table.
    pub fn column(self) -> &'static str {
        match self {
            TodoField::Title => "title",
            TodoField::Description => "description",
            TodoField::Status => "status",
        }
    }
}

/// The new value of a patched field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

/// A set of field changes for an existing todo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<bool>,
}

impl TodoPatch {
    /// Returns true when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    /// Present fields as `(field, value)` pairs.
    ///
    /// The order is fixed (title, description, status) so placeholder
    /// numbering is deterministic for a given set of fields.
    pub fn fields(&self) -> Vec<(TodoField, FieldValue)> {
        let mut fields = Vec::with_capacity(3);

        if let Some(title) = &self.title {
            fields.push((TodoField::Title, FieldValue::Text(title.clone())));
        }
        if let Some(description) = &self.description {
            fields.push((TodoField::Description, FieldValue::Text(description.clone())));
        }
        if let Some(status) = self.status {
            fields.push((TodoField::Status, FieldValue::Bool(status)));
        }

        fields
    }
}
