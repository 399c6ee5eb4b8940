//! Preset date ranges: named shortcuts resolved against the configured
//! bounds.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::bounds::DateBounds;
use super::date_math::{self, DateUnit};

/// A named range before bounds clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDefinition {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PresetDefinition {
    #[must_use]
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }
}

/// A preset after clamping, carrying the display string shown beside
/// the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPreset {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub display: String,
}

/// The built-in preset list, anchored at the latest selectable day.
///
/// "This month" is inserted only when the anchor sits at least six
/// days into its month, so month boundaries do not produce a
/// near-empty entry.
#[must_use]
pub fn default_presets(anchor: NaiveDate, bounds: DateBounds) -> Vec<PresetDefinition> {
    // Week-start is irrelevant for month arithmetic; any value works.
    let week_start = Weekday::Sun;
    let month_start = date_math::start_of(anchor, DateUnit::Month, week_start);
    let previous_month = date_math::subtract(anchor, 1, DateUnit::Month);
    let previous_month_end = date_math::end_of(previous_month, DateUnit::Month, week_start);

    let month_window = |months_back: u32| {
        let first = date_math::subtract(anchor, months_back, DateUnit::Month);
        date_math::start_of(first, DateUnit::Month, week_start)
    };

    let mut presets = vec![PresetDefinition::new(
        "Last 30 days",
        date_math::subtract(anchor, 29, DateUnit::Day),
        anchor,
    )];

    if anchor.signed_duration_since(month_start).num_days() >= 6 {
        presets.push(PresetDefinition::new("This month", month_start, anchor));
    }

    presets.extend([
        PresetDefinition::new(
            "Last month",
            month_window(1),
            previous_month_end,
        ),
        PresetDefinition::new("Last 3 months", month_window(3), previous_month_end),
        PresetDefinition::new("Last 6 months", month_window(6), previous_month_end),
        PresetDefinition::new("Last year", month_window(12), previous_month_end),
        PresetDefinition::new("All time", bounds.earliest(), bounds.latest()),
    ]);

    presets
}

/// Clamps each definition into bounds and attaches its display string.
///
/// Start and end are clamped independently; a preset whose start
/// predates the earliest bound becomes `[earliest, end]` even when
/// that collapses the range.
#[must_use]
pub fn resolve_presets(
    definitions: &[PresetDefinition],
    bounds: DateBounds,
    preset_format: &str,
) -> Vec<ResolvedPreset> {
    definitions
        .iter()
        .map(|definition| {
            let start = bounds.clamp(definition.start);
            let end = bounds.clamp(definition.end);
            let display = format!(
                "{} \u{2013} {}",
                date_math::format(start, preset_format),
                date_math::format(end, preset_format),
            );
            ResolvedPreset {
                label: definition.label.clone(),
                start,
                end,
                display,
            }
        })
        .collect()
}
