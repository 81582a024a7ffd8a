//! CSV word list parsing and validation
//!
//! Accepts `german,english[,german_example]` rows with an optional header.
//! Fields may be wrapped in double quotes to protect embedded commas.

use crate::core::{RawEntry, WordEntry};

/// Parse CSV text into import candidates
///
/// A first line mentioning `german` or `english` is treated as a header.
/// Blank lines are ignored. Rows with fewer than two fields are kept as
/// malformed candidates so [`validate`] can report them.
///
/// # Examples
/// ```
/// use vocab_match::wordlists::parse_csv;
///
/// let rows = parse_csv("german,english\nder Hund,the dog\n");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].source_text.as_deref(), Some("der Hund"));
/// ```
#[must_use]
pub fn parse_csv(content: &str) -> Vec<RawEntry> {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let has_header = lines.first().is_some_and(|first| {
        let lower = first.to_lowercase();
        lower.contains("german") || lower.contains("english")
    });

    let data_lines = if has_header { &lines[1..] } else { &lines[..] };

    data_lines
        .iter()
        .map(|line| {
            let fields = split_fields(line);
            let mut fields = fields.into_iter();

            RawEntry {
                source_text: fields.next(),
                target_text: fields.next(),
                example: fields.next().filter(|e| !e.is_empty()),
            }
        })
        .collect()
}

/// Split one line on commas outside double quotes, trimming each field
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Result of validating a candidate list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: Vec<WordEntry>,
    /// One message per rejected candidate, numbered from 1
    pub warnings: Vec<String>,
}

/// Keep complete candidates and describe the rest
#[must_use]
pub fn validate(entries: Vec<RawEntry>) -> Validation {
    let mut validation = Validation::default();

    for (index, raw) in entries.into_iter().enumerate() {
        match raw.into_entry() {
            Some(entry) => validation.valid.push(entry),
            None => validation
                .warnings
                .push(format!("Line {}: Missing german or english field", index + 1)),
        }
    }

    validation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_header() {
        let rows = parse_csv(
            "german,english,german_example\nder Hund,the dog,Ich habe einen Hund.\ndie Katze,the cat\n",
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].example.as_deref(), Some("Ich habe einen Hund."));
        assert_eq!(rows[1], RawEntry::new("die Katze", "the cat"));
    }

    #[test]
    fn parses_without_header() {
        let rows = parse_csv("Hund,dog\nKatze,cat");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], RawEntry::new("Hund", "dog"));
    }

    #[test]
    fn header_detection_is_case_insensitive() {
        let rows = parse_csv("German,English\nHund,dog");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let rows = parse_csv(r#""Guten Tag, Herr",  "good day, sir" , "Guten Tag, Herr Müller.""#);
        assert_eq!(rows[0].source_text.as_deref(), Some("Guten Tag, Herr"));
        assert_eq!(rows[0].target_text.as_deref(), Some("good day, sir"));
        assert_eq!(rows[0].example.as_deref(), Some("Guten Tag, Herr Müller."));
    }

    #[test]
    fn apostrophes_are_plain_text() {
        let rows = parse_csv("Es ist's,it's,");
        assert_eq!(rows[0], RawEntry::new("Es ist's", "it's"));
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let rows = parse_csv("Hund,dog\r\n\r\n   \nKatze,cat\r\n");
        assert_eq!(rows, vec![RawEntry::new("Hund", "dog"), RawEntry::new("Katze", "cat")]);
    }

    #[test]
    fn validate_reports_incomplete_rows() {
        let rows = parse_csv("Hund,dog\nnur ein Feld\n,empty source");
        let validation = validate(rows);

        assert_eq!(validation.valid, vec![WordEntry::new("Hund", "dog")]);
        assert_eq!(
            validation.warnings,
            vec![
                "Line 2: Missing german or english field".to_string(),
                "Line 3: Missing german or english field".to_string()
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(parse_csv("").is_empty());
        assert_eq!(validate(Vec::new()), Validation::default());
    }
}
