//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `todolist_core::storage`.

use todolist_core::storage::RepositoryError;

/// Maps a rusqlite error with a known ID to a RepositoryError.
///
/// # Error Mapping
///
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - `SQLITE_CANTOPEN` → `RepositoryError::ConnectionFailed`
/// - Column type or conversion failures → `RepositoryError::InvalidData`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: Option<&str>,
) -> RepositoryError {
    match err {
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.unwrap_or("unknown").to_string(),
        },

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        // A row came back but could not be decoded into the entity
        rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => {
            RepositoryError::InvalidData(err.to_string())
        }

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

fn map_tokio_rusqlite(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: Option<&str>,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, id)
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite(err, entity_type, None)
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// Use this variant when the entity ID is known at the call site.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    let id_str = id.into();
    map_tokio_rusqlite(err, entity_type, Some(&id_str))
}
