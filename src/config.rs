//! Runtime configuration
//!
//! Where session data lives and how chatty logging is.

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".vocab_match";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "VOCAB_MATCH_DATA_DIR";

const USER_DATA_FILE: &str = "user_words.json";
const STATS_FILE: &str = "stats.json";
const HISTORY_FILE: &str = "word_history.json";

/// Files kept in the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    dir: PathBuf,
}

impl DataPaths {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// User additions, edits and deletions
    #[must_use]
    pub fn user_data(&self) -> PathBuf {
        self.dir.join(USER_DATA_FILE)
    }

    /// Lifetime game statistics
    #[must_use]
    pub fn stats(&self) -> PathBuf {
        self.dir.join(STATS_FILE)
    }

    /// Words of the last round played today
    #[must_use]
    pub fn history(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

/// Log filter directive for the verbosity flag
///
/// `RUST_LOG`, when set, takes precedence over this.
#[must_use]
pub const fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "vocab_match=debug"
    } else {
        "vocab_match=warn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_data_dir() {
        let paths = DataPaths::new("/tmp/vocab");
        assert_eq!(paths.user_data(), PathBuf::from("/tmp/vocab/user_words.json"));
        assert_eq!(paths.stats(), PathBuf::from("/tmp/vocab/stats.json"));
        assert_eq!(paths.history(), PathBuf::from("/tmp/vocab/word_history.json"));
    }

    #[test]
    fn default_dir() {
        assert_eq!(DataPaths::default().dir(), Path::new(DEFAULT_DATA_DIR));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter(false), "vocab_match=warn");
        assert_eq!(log_filter(true), "vocab_match=debug");
    }
}
