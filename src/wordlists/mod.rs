//! Word lists for the matching game
//!
//! Embedded starter vocabulary, base list loading, and the parsers for the
//! formats words can be imported from.

mod csv;
mod embedded;
mod import;
pub mod loader;

pub use csv::{Validation, parse_csv, validate};
pub use embedded::{STARTER_WORDS, STARTER_WORDS_COUNT};
pub use import::{ImportDocument, ImportError};

use crate::core::WordEntry;

/// Serialize entries in the interchange format
///
/// A pretty-printed JSON array with two-space indentation and keys in the
/// order `german`, `english`, `german_example`. This is what export writes
/// and what the importer and base loader read.
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn to_json(entries: &[WordEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawEntry;

    #[test]
    fn starter_count_matches_const() {
        assert_eq!(STARTER_WORDS.len(), STARTER_WORDS_COUNT);
    }

    #[test]
    fn starter_words_have_unique_sources() {
        let mut seen = std::collections::HashSet::new();
        for &(source, _, _) in STARTER_WORDS {
            assert!(seen.insert(source), "duplicate starter word '{source}'");
        }
    }

    #[test]
    fn json_output_reads_back_as_records() {
        let entries = vec![
            WordEntry::new("Hund", "dog").with_example("Wau."),
            WordEntry::new("Katze", "cat"),
        ];
        let text = to_json(&entries).unwrap();

        let document = ImportDocument::parse(&text).unwrap();
        assert_eq!(document.kind(), "records");

        let read_back: Vec<WordEntry> = document
            .into_entries()
            .into_iter()
            .filter_map(RawEntry::into_entry)
            .collect();
        assert_eq!(read_back, entries);
    }

    #[test]
    fn empty_list_serializes_as_empty_array() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
