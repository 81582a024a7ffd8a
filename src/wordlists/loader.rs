//! Word list loading utilities
//!
//! Provides functions to load base word lists from files or use the embedded starter list.

use super::import::{ImportDocument, ImportError};
use crate::core::{RawEntry, WordEntry};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error loading a base word list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot import {}: {source}", .path.display())]
    Import {
        path: PathBuf,
        #[source]
        source: ImportError,
    },
}

/// Load a base word list from a JSON document
///
/// Accepts every shape the importer does. Incomplete entries are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a recognised document.
///
/// # Examples
/// ```no_run
/// use vocab_match::wordlists::loader::load_base_words;
///
/// let words = load_base_words("words.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_base_words<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = ImportDocument::parse(&content).map_err(|source| LoadError::Import {
        path: path.to_path_buf(),
        source,
    })?;

    let total = document.len();
    let words: Vec<WordEntry> = document
        .into_entries()
        .into_iter()
        .filter_map(RawEntry::into_entry)
        .collect();

    if words.len() < total {
        warn!(
            path = %path.display(),
            skipped = total - words.len(),
            "skipped incomplete base words"
        );
    }
    debug!(path = %path.display(), count = words.len(), "loaded base words");

    Ok(words)
}

/// Convert embedded rows to entries
///
/// # Examples
/// ```
/// use vocab_match::wordlists::loader::words_from_rows;
/// use vocab_match::wordlists::STARTER_WORDS;
///
/// let words = words_from_rows(STARTER_WORDS);
/// assert_eq!(words.len(), STARTER_WORDS.len());
/// ```
#[must_use]
pub fn words_from_rows(rows: &[(&str, &str, Option<&str>)]) -> Vec<WordEntry> {
    rows.iter()
        .map(|&(source, target, example)| {
            let entry = WordEntry::new(source, target);
            match example {
                Some(example) => entry.with_example(example),
                None => entry,
            }
        })
        .collect()
}
