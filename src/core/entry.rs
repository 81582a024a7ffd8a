//! Vocabulary entry representation
//!
//! A `WordEntry` is one source/target pair. Its `source_text` is the identity
//! key inside the collection it came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single vocabulary pair
///
/// Serialized with the game's field names (`german`, `english`,
/// `german_example`); the neutral names are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "german", alias = "source_text")]
    pub source_text: String,

    #[serde(rename = "english", alias = "target_text")]
    pub target_text: String,

    #[serde(
        rename = "german_example",
        alias = "example",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub example: Option<String>,
}

impl WordEntry {
    /// Create an entry without an example sentence
    ///
    /// # Examples
    /// ```
    /// use vocab_match::core::WordEntry;
    ///
    /// let entry = WordEntry::new("der Hund", "the dog");
    /// assert_eq!(entry.source_text, "der Hund");
    /// assert!(entry.example.is_none());
    /// ```
    #[must_use]
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
            example: None,
        }
    }

    /// Attach an example sentence
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source_text, self.target_text)
    }
}

/// An import candidate whose fields have not been validated yet
///
/// Produced by the import parsers; a candidate missing either side is a
/// malformed entry and never reaches a word collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub source_text: Option<String>,
    pub target_text: Option<String>,
    pub example: Option<String>,
}

impl RawEntry {
    #[must_use]
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: Some(source_text.into()),
            target_text: Some(target_text.into()),
            example: None,
        }
    }

    /// Validate into a `WordEntry`
    ///
    /// Returns `None` when either required field is missing or empty.
    #[must_use]
    pub fn into_entry(self) -> Option<WordEntry> {
        let source_text = self.source_text.filter(|s| !s.is_empty())?;
        let target_text = self.target_text.filter(|s| !s.is_empty())?;

        Some(WordEntry {
            source_text,
            target_text,
            example: self.example.filter(|e| !e.is_empty()),
        })
    }
}

impl From<WordEntry> for RawEntry {
    fn from(entry: WordEntry) -> Self {
        Self {
            source_text: Some(entry.source_text),
            target_text: Some(entry.target_text),
            example: entry.example,
        }
    }
}
