//! Read-side views over the word store
//!
//! `WordView` is what the management screens see: the original pair, the
//! pair currently in effect, and which overlays apply.

use serde::Serialize;
use std::fmt;

/// Collection an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// The repository-provided word list
    Base,
    /// Added by the user
    User,
}

impl Origin {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An entry annotated with its overlay status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordView {
    pub original_source_text: String,
    pub original_target_text: String,
    pub source_text: String,
    pub target_text: String,
    pub origin: Origin,
    pub is_edited: bool,
    pub is_deleted: bool,
}

impl WordView {
    /// Case-insensitive substring match on the current pair
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.source_text.to_lowercase().contains(&needle)
            || self.target_text.to_lowercase().contains(&needle)
    }
}

/// Named predicates for the management list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordFilter {
    #[default]
    All,
    Base,
    User,
    Edited,
    Deleted,
    /// Everything not soft-deleted
    Active,
}

impl WordFilter {
    /// Every filter, in menu order
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Base,
        Self::User,
        Self::Edited,
        Self::Deleted,
        Self::Active,
    ];

    /// Create filter from name string
    ///
    /// Supported names: "all", "base" (or "repo"), "user", "edited", "deleted", "active".
    /// Defaults to `All` if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "base" | "repo" => Self::Base,
            "user" => Self::User,
            "edited" => Self::Edited,
            "deleted" => Self::Deleted,
            "active" => Self::Active,
            _ => Self::All,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Base => "base",
            Self::User => "user",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Active => "active",
        }
    }

    #[must_use]
    pub fn matches(self, view: &WordView) -> bool {
        match self {
            Self::All => true,
            Self::Base => view.origin == Origin::Base,
            Self::User => view.origin == Origin::User,
            Self::Edited => view.is_edited,
            Self::Deleted => view.is_deleted,
            Self::Active => !view.is_deleted,
        }
    }
}

impl fmt::Display for WordFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(origin: Origin, is_edited: bool, is_deleted: bool) -> WordView {
        WordView {
            original_source_text: "Hund".to_string(),
            original_target_text: "dog".to_string(),
            source_text: "Hund".to_string(),
            target_text: "dog".to_string(),
            origin,
            is_edited,
            is_deleted,
        }
    }

    #[test]
    fn from_name_round_trips() {
        for filter in WordFilter::ALL {
            assert_eq!(WordFilter::from_name(filter.name()), filter);
        }
    }

    #[test]
    fn from_name_accepts_repo_alias() {
        assert_eq!(WordFilter::from_name("repo"), WordFilter::Base);
        assert_eq!(WordFilter::from_name(" Deleted "), WordFilter::Deleted);
    }

    #[test]
    fn from_name_unknown_is_all() {
        assert_eq!(WordFilter::from_name("bogus"), WordFilter::All);
    }

    #[test]
    fn predicates() {
        let base_deleted = view(Origin::Base, false, true);
        let user_edited = view(Origin::User, true, false);

        assert!(WordFilter::All.matches(&base_deleted));
        assert!(WordFilter::Base.matches(&base_deleted));
        assert!(!WordFilter::User.matches(&base_deleted));
        assert!(WordFilter::Deleted.matches(&base_deleted));
        assert!(!WordFilter::Active.matches(&base_deleted));

        assert!(WordFilter::User.matches(&user_edited));
        assert!(WordFilter::Edited.matches(&user_edited));
        assert!(WordFilter::Active.matches(&user_edited));
        assert!(!WordFilter::Deleted.matches(&user_edited));
    }

    #[test]
    fn origin_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Origin::Base).unwrap(), "\"base\"");
        assert_eq!(Origin::User.to_string(), "user");
    }
}
