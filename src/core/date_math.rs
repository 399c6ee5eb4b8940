//! Calendar-day arithmetic and pattern formatting.
//!
//! Every helper operates at day granularity on `chrono::NaiveDate`;
//! time of day never enters the picture. Arithmetic saturates at the
//! representable calendar range instead of panicking.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Weekday};

use serde::{Deserialize, Serialize};

/// Calendar units understood by arithmetic and the text resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
}

impl DateUnit {
    /// Maps a relative-phrase keyword (`"day"`, `"weeks"`, ...) to a unit.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "day" | "days" => Some(Self::Day),
            "week" | "weeks" => Some(Self::Week),
            "month" | "months" => Some(Self::Month),
            "year" | "years" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Adds `n` units, clamping month/year landings to the last valid day
/// (Jan 31 + 1 month = Feb 28/29). Saturates at the calendar maximum.
#[must_use]
pub fn add(date: NaiveDate, n: u32, unit: DateUnit) -> NaiveDate {
    let result = match unit {
        DateUnit::Day => date.checked_add_days(Days::new(u64::from(n))),
        DateUnit::Week => date.checked_add_days(Days::new(u64::from(n) * 7)),
        DateUnit::Month => date.checked_add_months(Months::new(n)),
        DateUnit::Year => date.checked_add_months(Months::new(n.saturating_mul(12))),
    };
    result.unwrap_or(NaiveDate::MAX)
}

/// Subtracts `n` units with the same clamping rules as [`add`].
#[must_use]
pub fn subtract(date: NaiveDate, n: u32, unit: DateUnit) -> NaiveDate {
    let result = match unit {
        DateUnit::Day => date.checked_sub_days(Days::new(u64::from(n))),
        DateUnit::Week => date.checked_sub_days(Days::new(u64::from(n) * 7)),
        DateUnit::Month => date.checked_sub_months(Months::new(n)),
        DateUnit::Year => date.checked_sub_months(Months::new(n.saturating_mul(12))),
    };
    result.unwrap_or(NaiveDate::MIN)
}

/// First day of the unit containing `date`. Weeks start on `week_start`.
#[must_use]
pub fn start_of(date: NaiveDate, unit: DateUnit, week_start: Weekday) -> NaiveDate {
    match unit {
        DateUnit::Day => date,
        DateUnit::Week => {
            let back = date.weekday().days_since(week_start);
            subtract(date, back, DateUnit::Day)
        }
        DateUnit::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date),
        DateUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date),
    }
}

/// Last day of the unit containing `date`. Weeks start on `week_start`.
#[must_use]
pub fn end_of(date: NaiveDate, unit: DateUnit, week_start: Weekday) -> NaiveDate {
    match unit {
        DateUnit::Day => date,
        DateUnit::Week => add(start_of(date, DateUnit::Week, week_start), 6, DateUnit::Day),
        DateUnit::Month => {
            let first = start_of(date, DateUnit::Month, week_start);
            subtract(add(first, 1, DateUnit::Month), 1, DateUnit::Day)
        }
        DateUnit::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    }
}

#[must_use]
pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

#[must_use]
pub fn is_before(a: NaiveDate, b: NaiveDate) -> bool {
    a < b
}

#[must_use]
pub fn is_after(a: NaiveDate, b: NaiveDate) -> bool {
    a > b
}

/// Strictly between `lower` and `upper`, exclusive on both ends.
#[must_use]
pub fn is_between(date: NaiveDate, lower: NaiveDate, upper: NaiveDate) -> bool {
    lower < date && date < upper
}

/// Returns `true` when `pattern` is a well-formed strftime pattern.
///
/// Formatting through an invalid pattern aborts mid-write, so patterns
/// are vetted once at engine construction instead.
#[must_use]
pub fn validate_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Formats `date` with a pre-validated strftime `pattern`.
#[must_use]
pub fn format(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

/// Strict parse against `pattern`; `None` when the text does not match.
#[must_use]
pub fn parse(text: &str, pattern: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), pattern).ok()
}

const PERMISSIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%m/%d/%Y",
];

/// Free-form parse accepting ISO-8601 and common textual forms.
///
/// Preset rows carry RFC 3339 timestamps while typed text follows the
/// configured input pattern; this fallback accepts both worlds.
#[must_use]
pub fn parse_permissive(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.date_naive());
    }

    PERMISSIVE_FORMATS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(trimmed, pattern).ok())
}
