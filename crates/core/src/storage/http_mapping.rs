//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `NoFields` -> 400 (Bad Request)
/// - `ConnectionFailed`, `QueryFailed`, `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todolist_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Todo",
///     id: "1".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::NoFields => 400,
        RepositoryError::ConnectionFailed(_) => 500,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::NotFound {
            entity_type: "Todo",
            id: "9".to_string(),
        };
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_no_fields_maps_to_400() {
        assert_eq!(repository_error_to_status_code(&RepositoryError::NoFields), 400);
    }

    #[test]
    fn test_persistence_errors_map_to_500() {
        let errors = [
            RepositoryError::ConnectionFailed("closed".to_string()),
            RepositoryError::QueryFailed("syntax error".to_string()),
            RepositoryError::InvalidData("bad column".to_string()),
        ];

        for error in &errors {
            assert_eq!(repository_error_to_status_code(error), 500, "{error}");
        }
    }
}
