//! A single matching round
//!
//! The board shows the round's German words in one shuffled column and their
//! translations in another. Matching a word to its translation scores
//! points; a wrong match costs points.

use crate::core::WordEntry;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Words dealt per round
pub const WORDS_PER_ROUND: usize = 5;

/// Points for a correct match
pub const MATCH_POINTS: u32 = 10;

/// Points lost for a wrong match
pub const MISS_PENALTY: u32 = 5;

/// Pick the words for the next round
///
/// Small lists are used whole. Otherwise words from the previous round are
/// avoided, unless that leaves too few to fill a round.
pub fn select_words_for_round<R: Rng + ?Sized>(
    all_words: &[WordEntry],
    previous_round: &[String],
    rng: &mut R,
) -> Vec<WordEntry> {
    if all_words.len() <= WORDS_PER_ROUND {
        return all_words.to_vec();
    }

    let available: Vec<&WordEntry> = all_words
        .iter()
        .filter(|w| !previous_round.contains(&w.source_text))
        .collect();

    if available.len() < WORDS_PER_ROUND {
        return all_words
            .choose_multiple(rng, WORDS_PER_ROUND)
            .cloned()
            .collect();
    }

    available
        .choose_multiple(rng, WORDS_PER_ROUND)
        .map(|&w| w.clone())
        .collect()
}

/// Rejected move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no word numbered {0}")]
    NoSuchWord(usize),

    #[error("no translation slot {0}")]
    NoSuchSlot(usize),

    #[error("that word is already matched")]
    WordAlreadyMatched,

    #[error("that translation is already filled")]
    SlotFilled,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Correct,
    Incorrect,
}

/// Completion summary of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub score: u32,
    pub matched: usize,
    pub seconds: u64,
    pub words_per_minute: u64,
}

/// Board state for one round
#[derive(Debug, Clone)]
pub struct Round {
    /// Left column, in display order
    words: Vec<WordEntry>,
    /// Right column, in display order
    slots: Vec<String>,
    word_matched: Vec<bool>,
    slot_filled: Vec<bool>,
    score: u32,
    started: Option<Instant>,
}

impl Round {
    /// Lay out a board with both columns shuffled independently
    pub fn deal<R: Rng + ?Sized>(words: Vec<WordEntry>, rng: &mut R) -> Self {
        let mut words = words;
        words.shuffle(rng);

        let mut slots: Vec<String> = words.iter().map(|w| w.target_text.clone()).collect();
        slots.shuffle(rng);

        Self {
            word_matched: vec![false; words.len()],
            slot_filled: vec![false; slots.len()],
            words,
            slots,
            score: 0,
            started: None,
        }
    }

    #[must_use]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    #[must_use]
    pub fn is_word_matched(&self, index: usize) -> bool {
        self.word_matched.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn is_slot_filled(&self, index: usize) -> bool {
        self.slot_filled.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn matched(&self) -> usize {
        self.word_matched.iter().filter(|&&m| m).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.word_matched.iter().all(|&m| m)
    }

    /// Time since the first move, zero before it
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }

    /// Drop word `word` onto translation slot `slot`
    ///
    /// A match is correct when the word's translation equals the slot text.
    /// The timer starts with the first accepted move.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, already matched words, and filled slots
    /// without changing the score.
    pub fn try_match(&mut self, word: usize, slot: usize) -> Result<MatchOutcome, MoveError> {
        let entry = self.words.get(word).ok_or(MoveError::NoSuchWord(word))?;
        let slot_text = self.slots.get(slot).ok_or(MoveError::NoSuchSlot(slot))?;

        if self.word_matched[word] {
            return Err(MoveError::WordAlreadyMatched);
        }
        if self.slot_filled[slot] {
            return Err(MoveError::SlotFilled);
        }

        if self.started.is_none() {
            self.started = Some(Instant::now());
        }

        if entry.target_text == *slot_text {
            self.word_matched[word] = true;
            self.slot_filled[slot] = true;
            self.score += MATCH_POINTS;
            Ok(MatchOutcome::Correct)
        } else {
            self.score = self.score.saturating_sub(MISS_PENALTY);
            Ok(MatchOutcome::Incorrect)
        }
    }

    /// Summary at the current moment
    #[must_use]
    pub fn result(&self) -> RoundResult {
        let seconds = self.elapsed().as_secs();
        RoundResult {
            score: self.score,
            matched: self.matched(),
            seconds,
            words_per_minute: words_per_minute(self.matched(), seconds),
        }
    }
}

/// Matched words per minute, rounded; zero for a zero-second round
#[must_use]
pub fn words_per_minute(matched: usize, seconds: u64) -> u64 {
    if seconds == 0 {
        return 0;
    }
    ((matched as f64 / seconds as f64) * 60.0).round() as u64
}
