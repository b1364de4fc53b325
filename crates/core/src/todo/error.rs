use thiserror::Error;

/// Errors raised while validating todo input, before the store is touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("No fields to update")]
    NoFields,
}
