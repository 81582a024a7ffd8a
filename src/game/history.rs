//! Words from the last round, remembered for the rest of the day

use crate::core::WordEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The previous round's words and the day they were played
///
/// Persisted as `{"date": "2026-01-31", "previousRoundWords": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordHistory {
    pub date: NaiveDate,
    #[serde(default)]
    pub previous_round_words: Vec<String>,
}

impl WordHistory {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            previous_round_words: Vec::new(),
        }
    }

    /// Words to avoid on `today`; a history from another day is stale
    #[must_use]
    pub fn previous_round(&self, today: NaiveDate) -> &[String] {
        if self.date == today {
            &self.previous_round_words
        } else {
            &[]
        }
    }

    /// Replace the history with the round just dealt
    pub fn record_round(&mut self, today: NaiveDate, words: &[WordEntry]) {
        self.date = today;
        self.previous_round_words = words.iter().map(|w| w.source_text.clone()).collect();
    }
}
