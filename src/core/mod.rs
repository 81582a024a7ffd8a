//! Core domain types for vocabulary entries
//!
//! Plain data with serde support; no storage or presentation concerns.

mod entry;

pub use entry::{RawEntry, WordEntry};
