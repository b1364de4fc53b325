use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("No fields to update")]
    NoFields,
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true for store-layer failures (connectivity, constraint
    /// violations, row decoding) as opposed to caller mistakes.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionFailed(_)
                | RepositoryError::QueryFailed(_)
                | RepositoryError::InvalidData(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
