//! Functional core for the todolist service.
//!
//! Pure data types and pure functions shared by the server: the `Todo` entity,
//! request payloads, the sparse update patch, validation, the response envelope
//! and the storage contract. Nothing in this crate performs I/O.

pub mod storage;
pub mod todo;
