//! Storage backend implementations.
//!
//! Concrete implementations of the repository trait defined in
//! `todolist_core::storage`.

pub mod sqlite;

pub use sqlite::SqliteRepository;
