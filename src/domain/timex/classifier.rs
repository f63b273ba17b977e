//! Surface classification of timex tokens.
//!
//! Assigns [`TimexType`] tags by inspecting the token's surface form only.
//! A token is `Definite` when its date portion spells out a real calendar
//! date with no unspecified component; everything else falls into the
//! range, partial-date, time and duration categories of the grammar.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::token::TimexToken;
use super::types::TimexType;

/// Token the grammar uses for "now".
const PRESENT_REF: &str = "PRESENT_REF";

struct TimexPatterns {
    // 2023-01-15
    full_date: Regex,
    // XXXX-05-12 (unspecified year)
    partial_date: Regex,
    // 2023-W32-3, XXXX-WXX-3 (weekday forms)
    weekday: Regex,
    // 2023, 2023-01
    year_or_month: Regex,
    // XXXX-05 (month of an unspecified year)
    partial_month: Regex,
    // 2023-W32, 2023-WXX
    week: Regex,
    // 09, 09:00, 09:00:30 (time portion after the separator)
    time: Regex,
}

fn patterns() -> &'static TimexPatterns {
    static PATTERNS: Lazy<TimexPatterns> = Lazy::new(|| TimexPatterns {
        full_date: Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap(),
        partial_date: Regex::new(r"^XXXX-(\d{2})-(\d{2})$").unwrap(),
        weekday: Regex::new(r"^(\d{4}|XXXX)-W(\d{2}|XX)-[1-7]$").unwrap(),
        year_or_month: Regex::new(r"^\d{4}(-\d{2})?$").unwrap(),
        partial_month: Regex::new(r"^XXXX-\d{2}$").unwrap(),
        week: Regex::new(r"^(\d{4}|XXXX)-W(\d{2}|XX)$").unwrap(),
        time: Regex::new(r"^\d{2}(:\d{2})?(:\d{2})?$").unwrap(),
    });
    &PATTERNS
}

/// Classifies a token into its set of [`TimexType`] tags.
///
/// Unrecognized surface forms yield an empty set; callers treating the
/// empty set as "not definite" get rejection for free.
pub fn classify(token: &TimexToken) -> HashSet<TimexType> {
    let mut tags = HashSet::new();
    let raw = token.as_str();

    if raw == PRESENT_REF {
        tags.insert(TimexType::Present);
        return tags;
    }

    // Durations start with the period designator and never carry a date.
    if raw.starts_with('P') {
        tags.insert(TimexType::Duration);
        return tags;
    }

    let (date_part, time_part) = match raw.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (raw, None),
    };

    if !date_part.is_empty() {
        classify_date_part(date_part, &mut tags);
    }

    if let Some(time) = time_part {
        if patterns().time.is_match(time) {
            tags.insert(TimexType::Time);
            if tags.contains(&TimexType::Date) {
                tags.insert(TimexType::DateTime);
            }
        }
    }

    tags
}

fn classify_date_part(part: &str, tags: &mut HashSet<TimexType>) {
    let patterns = patterns();

    if let Some(caps) = patterns.full_date.captures(part) {
        tags.insert(TimexType::Date);
        if is_real_calendar_date(&caps[1], &caps[2], &caps[3]) {
            tags.insert(TimexType::Definite);
        }
        return;
    }

    if patterns.partial_date.is_match(part) || patterns.weekday.is_match(part) {
        tags.insert(TimexType::Date);
        return;
    }

    if patterns.year_or_month.is_match(part)
        || patterns.partial_month.is_match(part)
        || patterns.week.is_match(part)
    {
        tags.insert(TimexType::DateRange);
    }
}

fn is_real_calendar_date(year: &str, month: &str, day: &str) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (year.parse(), month.parse(), day.parse()) else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
