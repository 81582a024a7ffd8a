//! Command implementations

pub mod convert;
pub mod manage;
pub mod play;

pub use convert::{ConvertResult, ConvertSource, DEFAULT_OUTPUT, run_convert};
pub use manage::{
    FormError, FormOutcome, delete_word, export_words, import_file, restore_word, submit_word,
};
pub use play::{load_history, load_stats, run_play};
