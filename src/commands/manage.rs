//! Word management commands
//!
//! The form-level checks the management screen performs before calling into
//! the store, plus file-based import and export.

use crate::persistence::UserDataStore;
use crate::store::{ImportSummary, StoreError, WordStore};
use crate::wordlists::ImportDocument;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Why a word form was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("German word is required")]
    MissingGerman,

    #[error("English translation is required")]
    MissingEnglish,

    #[error("no word named '{0}'")]
    UnknownWord(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a successful form submission did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Added,
    Updated,
}

/// Fail unless `source_text` is the original identity of a listed word
fn require_known<P: UserDataStore>(
    store: &WordStore<P>,
    source_text: &str,
) -> Result<(), FormError> {
    let known = store
        .all_words_with_metadata()
        .iter()
        .any(|w| w.original_source_text == source_text);

    if known {
        Ok(())
    } else {
        Err(FormError::UnknownWord(source_text.to_string()))
    }
}

/// Add a word, or edit `editing` when given
///
/// Inputs are trimmed and must be non-empty. `editing` must name a word
/// by its original German text.
///
/// # Errors
///
/// Returns an error for an empty field, an unknown word, or an identity
/// collision.
pub fn submit_word<P: UserDataStore>(
    store: &mut WordStore<P>,
    editing: Option<&str>,
    german: &str,
    english: &str,
) -> Result<FormOutcome, FormError> {
    let german = german.trim();
    let english = english.trim();

    if german.is_empty() {
        return Err(FormError::MissingGerman);
    }
    if english.is_empty() {
        return Err(FormError::MissingEnglish);
    }

    match editing {
        Some(original) => {
            require_known(store, original)?;
            store.edit_word(original, german, english)?;
            Ok(FormOutcome::Updated)
        }
        None => {
            store.add_word(german, english)?;
            Ok(FormOutcome::Added)
        }
    }
}

/// Soft-delete a listed word
///
/// # Errors
///
/// Returns `UnknownWord` if no word has this original German text.
pub fn delete_word<P: UserDataStore>(
    store: &mut WordStore<P>,
    german: &str,
) -> Result<(), FormError> {
    require_known(store, german)?;
    store.delete_word(german);
    Ok(())
}

/// Bring back a deleted word
///
/// # Errors
///
/// Returns `UnknownWord` if no word has this original German text.
pub fn restore_word<P: UserDataStore>(
    store: &mut WordStore<P>,
    german: &str,
) -> Result<(), FormError> {
    require_known(store, german)?;
    store.restore_word(german);
    Ok(())
}

/// Import words from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn import_file<P: UserDataStore>(
    store: &mut WordStore<P>,
    path: &Path,
) -> Result<ImportSummary> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let document = ImportDocument::parse(&content)
        .with_context(|| format!("importing {}", path.display()))?;

    Ok(store.import_words(document.into_entries()))
}

/// Export the active words to `output`, or return them when `None`
///
/// Returns the exported text and the number of words in it.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn export_words<P: UserDataStore>(
    store: &WordStore<P>,
    output: Option<&Path>,
) -> Result<(String, usize)> {
    let count = store.merged_active_words().len();
    let mut text = store.export_active_words()?;
    text.push('\n');

    if let Some(path) = output {
        fs::write(path, &text).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok((text, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawEntry, WordEntry};
    use crate::persistence::MemoryStore;

    fn store() -> WordStore {
        let mut store = WordStore::open(MemoryStore::new());
        store.set_base_words(vec![WordEntry::new("der Hund", "the dog")]);
        store
    }

    #[test]
    fn submit_trims_and_adds() {
        let mut store = store();
        let outcome = submit_word(&mut store, None, "  die Katze ", " the cat").unwrap();

        assert_eq!(outcome, FormOutcome::Added);
        assert_eq!(
            store.user_data().user_words,
            vec![WordEntry::new("die Katze", "the cat")]
        );
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut store = store();
        assert_eq!(
            submit_word(&mut store, None, "   ", "x"),
            Err(FormError::MissingGerman)
        );
        assert_eq!(
            submit_word(&mut store, None, "Haus", ""),
            Err(FormError::MissingEnglish)
        );
        assert!(store.user_data().is_empty());
    }

    #[test]
    fn submit_edit() {
        let mut store = store();
        let outcome = submit_word(&mut store, Some("der Hund"), "der Hund", "the hound").unwrap();

        assert_eq!(outcome, FormOutcome::Updated);
        assert_eq!(store.merged_active_words()[0].target_text, "the hound");
    }

    #[test]
    fn submit_duplicate_reports_store_error() {
        let mut store = store();
        let err = submit_word(&mut store, None, "der Hund", "dog").unwrap_err();
        assert_eq!(err.to_string(), "the word 'der Hund' already exists");
    }

    #[test]
    fn edit_of_unknown_word_leaves_no_record() {
        let mut store = store();
        assert_eq!(
            submit_word(&mut store, Some("der Hnud"), "die Katze", "the cat"),
            Err(FormError::UnknownWord("der Hnud".to_string()))
        );

        assert!(store.user_data().edited_words.is_empty());
        assert_eq!(store.all_words_with_metadata().len(), 1);
        assert_eq!(store.import_words([RawEntry::new("die Katze", "the cat")]).added, 1);
    }

    #[test]
    fn edit_by_original_name_after_rename() {
        let mut store = store();
        submit_word(&mut store, Some("der Hund"), "Hund", "dog").unwrap();

        assert_eq!(
            submit_word(&mut store, Some("Hund"), "Hund", "hound"),
            Err(FormError::UnknownWord("Hund".to_string()))
        );
        submit_word(&mut store, Some("der Hund"), "Hund", "hound").unwrap();
        assert_eq!(store.merged_active_words()[0].target_text, "hound");
    }

    #[test]
    fn delete_of_unknown_word_does_not_hide_later_add() {
        let mut store = store();
        assert_eq!(
            delete_word(&mut store, "die Maus"),
            Err(FormError::UnknownWord("die Maus".to_string()))
        );
        assert!(store.user_data().deleted_words.is_empty());

        submit_word(&mut store, None, "die Maus", "the mouse").unwrap();
        assert!(
            store
                .merged_active_words()
                .iter()
                .any(|w| w.source_text == "die Maus")
        );
    }

    #[test]
    fn delete_and_restore_listed_word() {
        let mut store = store();
        delete_word(&mut store, "der Hund").unwrap();
        assert!(store.merged_active_words().is_empty());

        assert_eq!(
            restore_word(&mut store, "der Hnud"),
            Err(FormError::UnknownWord("der Hnud".to_string()))
        );
        restore_word(&mut store, "der Hund").unwrap();
        assert_eq!(store.merged_active_words().len(), 1);
    }

    #[test]
    fn import_then_export_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, r#"[["die Katze", "the cat"], ["der Hund", "the dog"]]"#).unwrap();

        let mut store = store();
        let summary = import_file(&mut store, &input).unwrap();
        assert_eq!(summary.added, 1);
        assert_eq!(summary.skipped, 1);

        let output = dir.path().join("out.json");
        let (text, count) = export_words(&store, Some(&output)).unwrap();
        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), text);
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn import_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        fs::write(&input, "true").unwrap();

        let mut store = store();
        assert!(import_file(&mut store, &input).is_err());
        assert!(import_file(&mut store, &dir.path().join("missing.json")).is_err());
    }
}
