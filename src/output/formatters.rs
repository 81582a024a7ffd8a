//! Formatting utilities for terminal output

use crate::store::WordView;

/// Letter shown for a translation slot (`a`, `b`, ...)
#[must_use]
pub fn slot_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|&i| i < 26)
        .map_or('?', |i| char::from(b'a' + i))
}

/// Comma-separated overlay flags, empty for an untouched entry
#[must_use]
pub fn status_label(view: &WordView) -> String {
    let mut flags = Vec::new();
    if view.is_edited {
        flags.push("edited");
    }
    if view.is_deleted {
        flags.push("deleted");
    }
    flags.join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
