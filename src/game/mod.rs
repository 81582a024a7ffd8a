//! Matching game played over the store's active words
//!
//! The game only reads [`crate::store::WordStore::merged_active_words`];
//! choosing and shuffling a round's words happens here.

pub mod history;
pub mod round;
pub mod stats;

pub use history::WordHistory;
pub use round::{
    MATCH_POINTS, MISS_PENALTY, MatchOutcome, MoveError, Round, RoundResult, WORDS_PER_ROUND,
    select_words_for_round,
};
pub use stats::{GameStats, format_time};
