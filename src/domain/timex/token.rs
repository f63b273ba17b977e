//! Timex token value object.
//!
//! A timex token is a string in a constrained temporal-expression grammar:
//! `2023-01-15` (a full date), `XXXX-05-12` (a date with unspecified year),
//! `2023-W32` (a week), `2023-01-15T09:00` (a date with time of day).
//! Unspecified components are marked with the `X` sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Sentinel character marking an unspecified component in a timex token.
pub const AMBIGUITY_MARKER: char = 'X';

/// Separator between the date and time-of-day portions of a token.
const TIME_SEPARATOR: char = 'T';

/// A token in the timex grammar, possibly partially specified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimexToken(String);

impl TimexToken {
    /// Creates a token from raw text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the text is empty or
    /// whitespace only.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("timex"));
        }
        Ok(Self(raw))
    }

    /// Returns the raw token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the date portion of the token, without any time of day.
    pub fn date_part(&self) -> &str {
        self.0.split(TIME_SEPARATOR).next().unwrap_or(&self.0)
    }

    /// Returns a new token with the time-of-day portion removed.
    ///
    /// Time-only tokens are returned unchanged, so the result is always a
    /// valid token.
    pub fn strip_time(&self) -> TimexToken {
        let date = self.date_part();
        if date.is_empty() {
            return self.clone();
        }
        Self(date.to_string())
    }

    /// True when the token carries the unresolved-component marker.
    ///
    /// This is a surface check over the raw text; it does not classify
    /// the token semantically.
    pub fn has_unresolved_component(&self) -> bool {
        self.0.contains(AMBIGUITY_MARKER)
    }
}

impl fmt::Display for TimexToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn accepts_non_empty_text() {
            let token = TimexToken::new("2023-01-15").unwrap();
            assert_eq!(token.as_str(), "2023-01-15");
        }

        #[test]
        fn rejects_empty_text() {
            assert!(TimexToken::new("").is_err());
        }

        #[test]
        fn rejects_whitespace_only_text() {
            assert!(TimexToken::new("   \t").is_err());
        }

        #[test]
        fn serializes_as_transparent_string() {
            let token = TimexToken::new("2023-01-15").unwrap();
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, "\"2023-01-15\"");
        }
    }

    mod time_stripping {
        use super::*;

        #[test]
        fn date_part_removes_time_of_day() {
            let token = TimexToken::new("2023-01-15T09:00").unwrap();
            assert_eq!(token.date_part(), "2023-01-15");
        }

        #[test]
        fn date_part_is_identity_without_time() {
            let token = TimexToken::new("2023-01-15").unwrap();
            assert_eq!(token.date_part(), "2023-01-15");
        }

        #[test]
        fn strip_time_returns_new_token() {
            let token = TimexToken::new("2023-01-15T09:00").unwrap();
            let stripped = token.strip_time();
            assert_eq!(stripped.as_str(), "2023-01-15");
            // original untouched
            assert_eq!(token.as_str(), "2023-01-15T09:00");
        }

        #[test]
        fn date_part_of_time_only_token_is_empty() {
            let token = TimexToken::new("T09:00").unwrap();
            assert_eq!(token.date_part(), "");
        }

        #[test]
        fn strip_time_keeps_time_only_tokens_intact() {
            let token = TimexToken::new("T09:00").unwrap();
            assert_eq!(token.strip_time(), token);
        }
    }

    mod marker_detection {
        use super::*;

        #[test]
        fn detects_unspecified_year() {
            let token = TimexToken::new("XXXX-05-12").unwrap();
            assert!(token.has_unresolved_component());
        }

        #[test]
        fn detects_unspecified_week() {
            let token = TimexToken::new("2023-WXX").unwrap();
            assert!(token.has_unresolved_component());
        }

        #[test]
        fn full_date_has_no_marker() {
            let token = TimexToken::new("2023-01-15").unwrap();
            assert!(!token.has_unresolved_component());
        }

        #[test]
        fn week_number_is_not_a_marker() {
            let token = TimexToken::new("2023-W32").unwrap();
            assert!(!token.has_unresolved_component());
        }
    }
}
