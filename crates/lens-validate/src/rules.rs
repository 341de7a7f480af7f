//! Built-in per-column predicates.
//!
//! Each predicate is a pure function from one raw value to a boolean.
//! Integer-based predicates treat any input that does not parse as an
//! integer as invalid rather than erroring, so a stray string in a numeric
//! column surfaces as a failed check instead of aborting the run.

use lens_ingest::parse_i64;

/// Valid MovieLens movie identifiers.
pub const MOVIE_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=3952;

/// Valid MovieLens user identifiers.
pub const USER_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=6040;

/// Age brackets used by the users dataset.
pub const VALID_AGES: [i64; 7] = [1, 18, 25, 35, 45, 50, 56];

pub fn valid_movieid(value: &str) -> bool {
    matches!(parse_i64(value), Some(id) if MOVIE_ID_RANGE.contains(&id))
}

pub fn valid_userid(value: &str) -> bool {
    matches!(parse_i64(value), Some(id) if USER_ID_RANGE.contains(&id))
}

pub fn valid_gender(value: &str) -> bool {
    value == "M" || value == "F"
}

pub fn valid_age(value: &str) -> bool {
    matches!(parse_i64(value), Some(age) if VALID_AGES.contains(&age))
}

pub fn valid_occupation(value: &str) -> bool {
    matches!(parse_i64(value), Some(code) if (0..=20).contains(&code))
}

pub fn valid_ratings(value: &str) -> bool {
    matches!(parse_i64(value), Some(rating) if (1..=5).contains(&rating))
}
