//! Validator registry: named validators resolved to per-column predicates.
//!
//! Dynamic name-to-validator resolution is a fixed tagged-variant dispatch.
//! An unknown validator name resolves to `Disabled`, meaning "no custom
//! validation configured for this dataset" rather than an error.

use crate::rules;

/// A per-column predicate: one raw value in, pass/fail out.
pub type Predicate = fn(&str) -> bool;

/// The finite set of dataset validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetValidator {
    /// Movies dataset rules.
    Movie,
    /// Users dataset rules.
    User,
    /// Ratings dataset rules; identifier checks delegate to the movie and
    /// user predicates.
    Rating,
    /// No custom validation. Resolution target for unknown names.
    Disabled,
}

impl DatasetValidator {
    /// Resolve a logical dataset-role name. Matching is case-insensitive;
    /// any unrecognized name maps to `Disabled`.
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "movie" => DatasetValidator::Movie,
            "user" => DatasetValidator::User,
            "rating" => DatasetValidator::Rating,
            _ => DatasetValidator::Disabled,
        }
    }

    pub fn is_disabled(self) -> bool {
        matches!(self, DatasetValidator::Disabled)
    }

    /// Look up the predicate this validator exposes for a column.
    pub fn predicate(self, column: &str) -> Option<Predicate> {
        match (self, column) {
            (DatasetValidator::Movie, "movieid") => Some(rules::valid_movieid),
            (DatasetValidator::User, "userid") => Some(rules::valid_userid),
            (DatasetValidator::User, "gender") => Some(rules::valid_gender),
            (DatasetValidator::User, "age") => Some(rules::valid_age),
            (DatasetValidator::User, "occupation") => Some(rules::valid_occupation),
            (DatasetValidator::Rating, "ratings") => Some(rules::valid_ratings),
            (DatasetValidator::Rating, "movieid") => Some(rules::valid_movieid),
            (DatasetValidator::Rating, "userid") => Some(rules::valid_userid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_case_insensitively() {
        assert_eq!(DatasetValidator::resolve("movie"), DatasetValidator::Movie);
        assert_eq!(DatasetValidator::resolve("User"), DatasetValidator::User);
        assert_eq!(
            DatasetValidator::resolve(" RATING "),
            DatasetValidator::Rating
        );
    }

    #[test]
    fn unknown_name_resolves_to_disabled() {
        assert_eq!(
            DatasetValidator::resolve("genome"),
            DatasetValidator::Disabled
        );
        assert!(DatasetValidator::resolve("").is_disabled());
    }

    #[test]
    fn rating_delegates_identifier_predicates() {
        let movie_pred = DatasetValidator::Rating.predicate("movieid").unwrap();
        assert!(movie_pred("3952"));
        assert!(!movie_pred("3953"));

        let user_pred = DatasetValidator::Rating.predicate("userid").unwrap();
        assert!(user_pred("6040"));
        assert!(!user_pred("6041"));
    }

    #[test]
    fn missing_predicate_is_none() {
        assert!(DatasetValidator::Movie.predicate("title").is_none());
        assert!(DatasetValidator::Disabled.predicate("movieid").is_none());
    }
}
