//! Layered vocabulary store
//!
//! A [`WordStore`] combines four collections:
//!
//! - the base word list, supplied by a loader and never modified here
//! - words the user added
//! - edits, keyed by the *original* `source_text` of the entry they replace
//! - soft-deletions, also keyed by original `source_text`
//!
//! Reads resolve these lazily into [`Record`]s (origin, original entry,
//! overlay state), so every view applies the same identity rules. Only the
//! user's layers are persisted; the base list can be swapped at any time.

mod error;
mod view;

pub use error::StoreError;
pub use view::{Origin, WordFilter, WordView};

use crate::core::{RawEntry, WordEntry};
use crate::persistence::{MemoryStore, PersistenceError, UserData, UserDataStore};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

/// Outcome of an import batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries appended to the user's words
    pub added: usize,
    /// Entries not added, including malformed ones
    pub skipped: usize,
    /// Skipped entries that lacked a required field
    pub malformed: usize,
}

/// A base or user entry with its overlays looked up
struct Record<'a> {
    origin: Origin,
    original: &'a WordEntry,
    edit: Option<&'a WordEntry>,
    deleted: bool,
}

impl<'a> Record<'a> {
    fn identity(&self) -> &'a str {
        &self.original.source_text
    }

    fn current_source(&self) -> &'a str {
        self.edit.map_or(self.identity(), |edit| edit.source_text.as_str())
    }

    /// The entry in effect
    ///
    /// An edit replaces the pair. The original example survives only when the
    /// edit keeps the same `source_text`, since it was written for that word.
    fn resolve(&self) -> WordEntry {
        match self.edit {
            Some(edit) if edit.source_text == self.original.source_text => WordEntry {
                example: edit.example.clone().or_else(|| self.original.example.clone()),
                ..edit.clone()
            },
            Some(edit) => edit.clone(),
            None => self.original.clone(),
        }
    }

    fn to_view(&self) -> WordView {
        let current = self.edit.unwrap_or(self.original);
        WordView {
            original_source_text: self.original.source_text.clone(),
            original_target_text: self.original.target_text.clone(),
            source_text: current.source_text.clone(),
            target_text: current.target_text.clone(),
            origin: self.origin,
            is_edited: self.edit.is_some(),
            is_deleted: self.deleted,
        }
    }
}

/// Vocabulary store for one session
///
/// Generic over its persistence collaborator. Every mutation is applied in
/// memory first and then saved; a failed save is logged and kept in
/// [`WordStore::last_save_error`] but never undoes the mutation.
#[derive(Debug)]
pub struct WordStore<P: UserDataStore = MemoryStore> {
    base_words: Vec<WordEntry>,
    data: UserData,
    persistence: P,
    last_save_error: Option<PersistenceError>,
}

impl<P: UserDataStore> WordStore<P> {
    /// Open a store, loading the user's saved layers
    ///
    /// Missing or unreadable data starts the session with empty layers.
    pub fn open(persistence: P) -> Self {
        let data = match persistence.load() {
            Ok(Some(data)) => data,
            Ok(None) => UserData::default(),
            Err(e) => {
                warn!(error = %e, "could not load user data, starting with none");
                UserData::default()
            }
        };

        debug!(
            user_words = data.user_words.len(),
            edits = data.edited_words.len(),
            deleted = data.deleted_words.len(),
            "opened word store"
        );

        Self {
            base_words: Vec::new(),
            data,
            persistence,
            last_save_error: None,
        }
    }

    /// Replace the base word list
    ///
    /// Nothing is validated against the user's layers here; conflicts are
    /// resolved when reading.
    pub fn set_base_words(&mut self, entries: Vec<WordEntry>) {
        debug!(count = entries.len(), "base words replaced");
        self.base_words = entries;
    }

    #[must_use]
    pub fn base_words(&self) -> &[WordEntry] {
        &self.base_words
    }

    #[must_use]
    pub const fn user_data(&self) -> &UserData {
        &self.data
    }

    #[must_use]
    pub const fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Error from the most recent save, cleared by the next successful one
    #[must_use]
    pub const fn last_save_error(&self) -> Option<&PersistenceError> {
        self.last_save_error.as_ref()
    }

    /// Base records in order, then user records in order
    fn records(&self) -> impl Iterator<Item = Record<'_>> {
        let base = self.base_words.iter().map(|w| (Origin::Base, w));
        let user = self.data.user_words.iter().map(|w| (Origin::User, w));

        base.chain(user).map(|(origin, original)| Record {
            origin,
            original,
            edit: self.data.edited_words.get(&original.source_text),
            deleted: self.data.deleted_words.contains(&original.source_text),
        })
    }

    /// The word list used for gameplay
    ///
    /// Deleted entries are dropped and edits applied. When two entries
    /// resolve to the same `source_text` the first one wins, so base words
    /// take priority over user words. Order is base order then user order.
    #[must_use]
    pub fn merged_active_words(&self) -> Vec<WordEntry> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();

        self.records()
            .filter(|r| !r.deleted)
            .filter(|r| seen.insert(r.current_source()))
            .map(|r| r.resolve())
            .collect()
    }

    /// Every entry with its overlay status, for management screens
    ///
    /// Deleted and edited entries are included. A user entry whose original
    /// identity is also a base identity is left out, as in the merged list.
    #[must_use]
    pub fn all_words_with_metadata(&self) -> Vec<WordView> {
        let base_identities: FxHashSet<&str> = self
            .base_words
            .iter()
            .map(|w| w.source_text.as_str())
            .collect();

        self.records()
            .filter(|r| r.origin == Origin::Base || !base_identities.contains(r.identity()))
            .map(|r| r.to_view())
            .collect()
    }

    /// Whether `source_text` is the original identity of any base or user entry
    fn identity_exists(&self, source_text: &str) -> bool {
        self.base_words
            .iter()
            .chain(&self.data.user_words)
            .any(|w| w.source_text == source_text)
    }

    /// Whether an entry other than `editing` currently resolves to `source_text`
    fn taken_by_other(&self, source_text: &str, editing: &str) -> bool {
        self.records()
            .any(|r| r.identity() != editing && r.current_source() == source_text)
            || self
                .data
                .edited_words
                .iter()
                .any(|(original, edit)| original != editing && edit.source_text == source_text)
    }

    /// Add a word to the user's collection
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIdentity` if any base or user entry already has this
    /// `source_text`, deleted or not. The store is unchanged in that case.
    pub fn add_word(
        &mut self,
        source_text: impl Into<String>,
        target_text: impl Into<String>,
    ) -> Result<(), StoreError> {
        let source_text = source_text.into();
        if self.identity_exists(&source_text) {
            return Err(StoreError::DuplicateIdentity(source_text));
        }

        debug!(word = %source_text, "adding word");
        self.data
            .user_words
            .push(WordEntry::new(source_text, target_text));
        self.persist();
        Ok(())
    }

    /// Replace the pair for the entry originally named `original_source_text`
    ///
    /// Editing the same entry again overwrites the previous edit. Deletion
    /// state is left alone.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateIdentity` if another entry currently resolves to
    /// `new_source_text`, or another edit already targets it.
    pub fn edit_word(
        &mut self,
        original_source_text: &str,
        new_source_text: impl Into<String>,
        new_target_text: impl Into<String>,
    ) -> Result<(), StoreError> {
        let new_source_text = new_source_text.into();
        if self.taken_by_other(&new_source_text, original_source_text) {
            return Err(StoreError::DuplicateIdentity(new_source_text));
        }

        debug!(original = %original_source_text, word = %new_source_text, "editing word");
        self.data.edited_words.insert(
            original_source_text.to_string(),
            WordEntry::new(new_source_text, new_target_text),
        );
        self.persist();
        Ok(())
    }

    /// Soft-delete the entry originally named `source_text`
    pub fn delete_word(&mut self, source_text: &str) {
        if self.data.deleted_words.insert(source_text.to_string()) {
            debug!(word = %source_text, "deleted word");
        }
        self.persist();
    }

    /// Undo a soft-delete, bringing back the entry with any edit it had
    pub fn restore_word(&mut self, source_text: &str) {
        if self.data.deleted_words.remove(source_text) {
            debug!(word = %source_text, "restored word");
        }
        self.persist();
    }

    /// Add new words from an import batch
    ///
    /// An entry is added only if its `source_text` is not a base or user
    /// identity and not the target of any edit. Entries missing a field are
    /// skipped. Existing words are never overwritten. Saves once at the end.
    pub fn import_words<I>(&mut self, entries: I) -> ImportSummary
    where
        I: IntoIterator<Item = RawEntry>,
    {
        let mut summary = ImportSummary::default();

        for raw in entries {
            let Some(entry) = raw.into_entry() else {
                summary.malformed += 1;
                summary.skipped += 1;
                continue;
            };

            let exists = self.identity_exists(&entry.source_text)
                || self
                    .data
                    .edited_words
                    .values()
                    .any(|edit| edit.source_text == entry.source_text);

            if exists {
                summary.skipped += 1;
            } else {
                self.data.user_words.push(entry);
                summary.added += 1;
            }
        }

        if summary.malformed > 0 {
            warn!(count = summary.malformed, "skipped malformed import entries");
        }
        debug!(added = summary.added, skipped = summary.skipped, "import finished");

        self.persist();
        summary
    }

    /// The merged active list in the interchange format
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn export_active_words(&self) -> serde_json::Result<String> {
        crate::wordlists::to_json(&self.merged_active_words())
    }

    /// Entries whose current pair contains `query`, ignoring case
    #[must_use]
    pub fn search_words(&self, query: &str) -> Vec<WordView> {
        self.all_words_with_metadata()
            .into_iter()
            .filter(|w| w.matches_query(query))
            .collect()
    }

    #[must_use]
    pub fn filter_words(&self, filter: WordFilter) -> Vec<WordView> {
        self.all_words_with_metadata()
            .into_iter()
            .filter(|w| filter.matches(w))
            .collect()
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.data) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!(error = %e, "could not save user data; changes kept for this session");
                self.last_save_error = Some(e);
            }
        }
    }
}
