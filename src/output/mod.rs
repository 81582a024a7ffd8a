//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_convert_result, print_import_summary, print_move_outcome,
    print_round_complete, print_save_warning, print_stats, print_word_table,
};
