//! Persistence of user word data
//!
//! The word store never touches storage directly. It talks to a
//! [`UserDataStore`], which loads the user's additions, edits and deletions
//! at startup and saves them after each change.

mod file;
mod memory;

pub use file::{JsonFileStore, read_json, write_json_atomic};
pub use memory::MemoryStore;

use crate::core::WordEntry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use thiserror::Error;

/// Everything the user has layered on top of the base word list
///
/// Persisted as `{"userWords": [...], "editedWords": {...}, "deletedWords": [...]}`.
/// Missing keys load as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Words added by the user, in insertion order
    #[serde(default)]
    pub user_words: Vec<WordEntry>,

    /// Replacement entries keyed by the original `source_text`
    #[serde(default)]
    pub edited_words: BTreeMap<String, WordEntry>,

    /// Original `source_text` values that are soft-deleted
    #[serde(default)]
    pub deleted_words: BTreeSet<String>,
}

impl UserData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_words.is_empty() && self.edited_words.is_empty() && self.deleted_words.is_empty()
    }
}

/// Failure to read or write persisted user data
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The underlying storage could not be read or written
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// Stored data exists but could not be parsed
    #[error("stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A durable home for [`UserData`]
pub trait UserDataStore {
    /// Load previously saved data
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unreadable or holds unparsable data.
    fn load(&self) -> Result<Option<UserData>, PersistenceError>;

    /// Replace the saved data
    ///
    /// # Errors
    ///
    /// Returns an error if the data could not be written.
    fn save(&mut self, data: &UserData) -> Result<(), PersistenceError>;
}
