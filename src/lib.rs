//! Vocabulary Match
//!
//! A German/English vocabulary matching game built around a layered word store:
//! a read-only base list, the user's own words, edits and soft-deletions.
//!
//! # Quick Start
//!
//! ```rust
//! use vocab_match::core::WordEntry;
//! use vocab_match::persistence::MemoryStore;
//! use vocab_match::store::WordStore;
//!
//! let mut store = WordStore::open(MemoryStore::new());
//! store.set_base_words(vec![WordEntry::new("der Hund", "the dog")]);
//!
//! store.edit_word("der Hund", "der Hund", "the hound").unwrap();
//! store.add_word("die Katze", "the cat").unwrap();
//! assert!(store.add_word("der Hund", "dog").is_err());
//!
//! let words = store.merged_active_words();
//! assert_eq!(words[0].target_text, "the hound");
//! assert_eq!(words.len(), 2);
//! ```

// Core domain types
pub mod core;

// Layered word store
pub mod store;

// Storage for the user's layers
pub mod persistence;

// Word lists and import formats
pub mod wordlists;

// Round dealing, scoring and stats
pub mod game;

// Paths and logging settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
