//! In-memory persistence for tests and throwaway sessions

use super::{PersistenceError, UserData, UserDataStore};
use std::io;

/// Keeps the last saved document as serialized JSON
///
/// Data goes through the same codec as the file store. A store built with
/// [`MemoryStore::unavailable`] rejects every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Option<String>,
    saves: usize,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved document
    #[must_use]
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::default()
        }
    }

    /// A store whose saves always fail
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Last saved document, if any
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Number of successful saves
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl UserDataStore for MemoryStore {
    fn load(&self) -> Result<Option<UserData>, PersistenceError> {
        self.document
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(PersistenceError::from)
    }

    fn save(&mut self, data: &UserData) -> Result<(), PersistenceError> {
        if self.unavailable {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "storage disabled").into());
        }
        self.document = Some(serde_json::to_string(data)?);
        self.saves += 1;
        Ok(())
    }
}
