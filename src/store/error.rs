//! Word store error types

use thiserror::Error;

/// A mutation the store refused
///
/// Returned before any state changes. Persistence failures are not store
/// errors; see [`crate::persistence::PersistenceError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested `source_text` is already taken by another entry
    #[error("the word '{0}' already exists")]
    DuplicateIdentity(String),
}
