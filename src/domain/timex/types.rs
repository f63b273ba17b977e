//! Timex classification tags.

use serde::{Deserialize, Serialize};

/// Tags a surface classification assigns to a timex token.
///
/// A token usually carries several tags at once: `2023-01-15` is both a
/// `Date` and `Definite`, while `2023-01-15T09:00` adds `Time` and
/// `DateTime`. Only `Definite` tokens fully specify day, month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimexType {
    /// Fully specified calendar date (day, month and year all present).
    Definite,

    /// A calendar date, possibly with unspecified components.
    Date,

    /// A span of dates: a year, a month of a year, or a week.
    DateRange,

    /// A time of day.
    Time,

    /// A date combined with a time of day.
    DateTime,

    /// A duration (`P2D`, `PT1H`).
    Duration,

    /// The present moment (`PRESENT_REF`).
    Present,
}
