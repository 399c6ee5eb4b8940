//! Free-text date resolution for editable calendar fields.
//!
//! Resolution order, first match wins: keywords (`today`, `now`,
//! `earliest`, `latest`), relative phrases (`"5 days ago"`), then
//! pattern parsing after ordinal cleanup with a permissive fallback.
//! Failure is `None`; callers discard the edit and keep the previous
//! committed state.

use chrono::NaiveDate;
use tracing::trace;

use super::bounds::DateBounds;
use super::date_math::{self, DateUnit};

/// Inputs the resolver needs besides the text itself.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Reference "today" used by keywords and as the relative anchor
    /// of last resort.
    pub today: NaiveDate,
    /// Anchor for relative phrases.
    pub current: Option<NaiveDate>,
    pub bounds: DateBounds,
    pub input_format: &'a str,
    /// Year pattern appended when the text carries only month and day.
    pub jump_year_format: &'a str,
}

/// Resolves free text into a calendar date, or `None` when nothing matches.
#[must_use]
pub fn resolve_date_text(text: &str, ctx: &ResolveContext<'_>) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lowered = trimmed.to_ascii_lowercase();
    match lowered.as_str() {
        "today" | "now" => {
            return Some(ctx.today.min(ctx.bounds.latest()));
        }
        "earliest" => return Some(ctx.bounds.earliest()),
        "latest" => return Some(ctx.bounds.latest()),
        _ => {}
    }

    if let Some(resolved) = resolve_relative(&lowered, ctx) {
        trace!(text = trimmed, %resolved, "resolved relative phrase");
        return Some(resolved);
    }

    let tokens: Vec<String> = trimmed
        .split_whitespace()
        .map(strip_ordinal_token)
        .collect();

    // "April 7" is completed with the current year before parsing.
    let candidate = if tokens.len() == 2 {
        let year = date_math::format(ctx.today, ctx.jump_year_format);
        format!("{} {} {year}", tokens[0], tokens[1])
    } else {
        tokens.join(" ")
    };

    date_math::parse(&candidate, ctx.input_format)
        .or_else(|| date_math::parse_permissive(&candidate))
}

/// `"<N> <unit> ago"` / `"<N> <unit> ahead"` relative to the current
/// date, falling back to today when no current date is set.
fn resolve_relative(lowered: &str, ctx: &ResolveContext<'_>) -> Option<NaiveDate> {
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let [count, unit, direction] = tokens.as_slice() else {
        return None;
    };

    let count: u32 = count.parse().ok()?;
    let unit = DateUnit::from_keyword(unit)?;
    let anchor = ctx.current.unwrap_or(ctx.today);

    match *direction {
        "ago" => Some(date_math::subtract(anchor, count, unit)),
        "ahead" => Some(date_math::add(anchor, count, unit)),
        _ => None,
    }
}

/// Strips an ordinal suffix (`7th` -> `7`), including a trailing comma
/// attached to the suffix (`7th,` -> `7`). Other tokens pass through.
fn strip_ordinal_token(token: &str) -> String {
    let (body, had_comma) = match token.strip_suffix(',') {
        Some(body) => (body, true),
        None => (token, false),
    };

    let lowered = body.to_ascii_lowercase();
    for suffix in ["st", "nd", "rd", "th"] {
        if let Some(digits) = lowered.strip_suffix(suffix) {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return digits.to_owned();
            }
        }
    }

    if had_comma {
        format!("{body},")
    } else {
        token.to_owned()
    }
}
