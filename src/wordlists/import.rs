//! Import document parsing
//!
//! Word lists arrive in a few JSON shapes. Each recognised shape is one
//! variant of [`ImportDocument`]; anything else is rejected up front rather
//! than inspected field by field. Individual items that do not fit their shape
//! become empty [`RawEntry`] values, which the store counts as malformed.

use crate::core::RawEntry;
use serde_json::{Map, Value};
use thiserror::Error;

const RECORD_SOURCE_KEYS: &[&str] = &["german", "source_text"];
const RECORD_TARGET_KEYS: &[&str] = &["english", "target_text"];
const NESTED_SOURCE_KEYS: &[&str] = &["word", "target", "german"];
const NESTED_TARGET_KEYS: &[&str] = &["translation", "source", "english"];
const EXAMPLE_KEYS: &[&str] = &["german_example", "example"];

/// Error for documents that cannot be imported at all
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document shape: {0}")]
    UnsupportedFormat(&'static str),
}

/// A parsed import document, one variant per recognised shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDocument {
    /// `[{"german": "Hund", "english": "dog", "german_example": "..."}]`
    ///
    /// The interchange format written by export.
    Records(Vec<RawEntry>),

    /// `[["Hund", "dog"], ...]`
    Pairs(Vec<RawEntry>),

    /// `{"words": [...]}` or `{"vocabulary": [...]}` with items using
    /// `word`/`target`/`german` and `translation`/`source`/`english`
    Nested(Vec<RawEntry>),
}

impl ImportDocument {
    /// Parse JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or not one of the known shapes.
    ///
    /// # Examples
    /// ```
    /// use vocab_match::wordlists::ImportDocument;
    ///
    /// let doc = ImportDocument::parse(r#"[["Hund", "dog"]]"#).unwrap();
    /// assert_eq!(doc.kind(), "pairs");
    /// assert_eq!(doc.len(), 1);
    /// ```
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Classify an already-parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFormat` if the value is not one of the known shapes.
    pub fn from_value(value: Value) -> Result<Self, ImportError> {
        match value {
            Value::Array(items) => Self::from_array(&items),
            Value::Object(mut object) => {
                let list = match object.remove("words") {
                    Some(words @ Value::Array(_)) => Some(words),
                    _ => object.remove("vocabulary"),
                };

                match list {
                    Some(Value::Array(items)) => {
                        Ok(Self::Nested(items.iter().map(nested_entry).collect()))
                    }
                    Some(_) => Err(ImportError::UnsupportedFormat(
                        "'words' or 'vocabulary' must be an array",
                    )),
                    None => Err(ImportError::UnsupportedFormat(
                        "object has no 'words' or 'vocabulary' list",
                    )),
                }
            }
            _ => Err(ImportError::UnsupportedFormat(
                "expected an array or an object",
            )),
        }
    }

    /// The first item decides between records and pairs
    fn from_array(items: &[Value]) -> Result<Self, ImportError> {
        match items.first() {
            None | Some(Value::Object(_)) => Ok(Self::Records(items.iter().map(record_entry).collect())),
            Some(Value::Array(_)) => Ok(Self::Pairs(items.iter().map(pair_entry).collect())),
            Some(_) => Err(ImportError::UnsupportedFormat(
                "array items must be objects or [source, target] pairs",
            )),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Records(_) => "records",
            Self::Pairs(_) => "pairs",
            Self::Nested(_) => "nested",
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[RawEntry] {
        match self {
            Self::Records(entries) | Self::Pairs(entries) | Self::Nested(entries) => entries,
        }
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<RawEntry> {
        match self {
            Self::Records(entries) | Self::Pairs(entries) | Self::Nested(entries) => entries,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// First non-empty string among `keys`
fn first_string(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn record_entry(value: &Value) -> RawEntry {
    let Value::Object(object) = value else {
        return RawEntry::default();
    };

    RawEntry {
        source_text: first_string(object, RECORD_SOURCE_KEYS),
        target_text: first_string(object, RECORD_TARGET_KEYS),
        example: first_string(object, EXAMPLE_KEYS),
    }
}

fn nested_entry(value: &Value) -> RawEntry {
    let Value::Object(object) = value else {
        return RawEntry::default();
    };

    RawEntry {
        source_text: first_string(object, NESTED_SOURCE_KEYS),
        target_text: first_string(object, NESTED_TARGET_KEYS),
        example: first_string(object, EXAMPLE_KEYS),
    }
}

fn pair_entry(value: &Value) -> RawEntry {
    let Value::Array(items) = value else {
        return RawEntry::default();
    };

    let text_at = |i: usize| items.get(i).and_then(Value::as_str).map(str::to_string);

    RawEntry {
        source_text: text_at(0),
        target_text: text_at(1),
        example: None,
    }
}
