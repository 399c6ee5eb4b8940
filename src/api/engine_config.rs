use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::PresetDefinition;
use crate::error::{CalendarError, CalendarResult};
use crate::interaction::SelectionType;

/// Where preset rows come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PresetSource {
    Disabled,
    /// The built-in list anchored at the latest selectable day.
    #[default]
    BuiltIn,
    Custom(Vec<PresetDefinition>),
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load
/// picker setup without inventing their own ad-hoc format. Patterns
/// are strftime strings validated at engine construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEngineConfig {
    pub selection_type: SelectionType,
    /// When false, an empty single field stays empty instead of being
    /// back-filled with the live current-date text.
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub same_day_range: bool,
    #[serde(default = "default_input_format")]
    pub input_format: String,
    #[serde(default = "default_preset_format")]
    pub preset_format: String,
    #[serde(default = "default_jump_month_format")]
    pub jump_month_format: String,
    #[serde(default = "default_jump_year_format")]
    pub jump_year_format: String,
    /// Defaults to the input pattern itself, which doubles as a hint.
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Seven labels, Sunday-first; any other length falls back to the
    /// default set.
    #[serde(default)]
    pub weekday_labels: Option<Vec<String>>,
    #[serde(default = "default_week_start")]
    pub week_start: Weekday,
    #[serde(default)]
    pub earliest_date: Option<NaiveDate>,
    #[serde(default)]
    pub latest_date: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_date: Option<NaiveDate>,
    /// Forced to `Disabled` for `Single` pickers.
    #[serde(default)]
    pub presets: PresetSource,
}

impl CalendarEngineConfig {
    /// Creates a config with defaulted formats, bounds, and presets.
    #[must_use]
    pub fn new(selection_type: SelectionType) -> Self {
        Self {
            selection_type,
            required: default_required(),
            same_day_range: false,
            input_format: default_input_format(),
            preset_format: default_preset_format(),
            jump_month_format: default_jump_month_format(),
            jump_year_format: default_jump_year_format(),
            placeholder: None,
            weekday_labels: None,
            week_start: default_week_start(),
            earliest_date: None,
            latest_date: None,
            start_date: None,
            end_date: None,
            current_date: None,
            presets: PresetSource::default(),
        }
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_same_day_range(mut self, same_day_range: bool) -> Self {
        self.same_day_range = same_day_range;
        self
    }

    #[must_use]
    pub fn with_input_format(mut self, pattern: impl Into<String>) -> Self {
        self.input_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_preset_format(mut self, pattern: impl Into<String>) -> Self {
        self.preset_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_jump_month_format(mut self, pattern: impl Into<String>) -> Self {
        self.jump_month_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_jump_year_format(mut self, pattern: impl Into<String>) -> Self {
        self.jump_year_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_weekday_labels(mut self, labels: Vec<String>) -> Self {
        self.weekday_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, earliest: NaiveDate, latest: NaiveDate) -> Self {
        self.earliest_date = Some(earliest);
        self.latest_date = Some(latest);
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    #[must_use]
    pub fn with_current_date(mut self, current: NaiveDate) -> Self {
        self.current_date = Some(current);
        self
    }

    #[must_use]
    pub fn with_presets(mut self, presets: PresetSource) -> Self {
        self.presets = presets;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CalendarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalendarError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CalendarResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalendarError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

pub(super) fn default_earliest() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub(super) fn default_latest() -> NaiveDate {
    NaiveDate::from_ymd_opt(2900, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub(super) fn default_weekday_labels() -> Vec<String> {
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .into_iter()
        .map(str::to_owned)
        .collect()
}

fn default_required() -> bool {
    true
}

fn default_input_format() -> String {
    "%B %-d, %Y".to_owned()
}

fn default_preset_format() -> String {
    "%b %-d, %Y".to_owned()
}

fn default_jump_month_format() -> String {
    "%B".to_owned()
}

fn default_jump_year_format() -> String {
    "%Y".to_owned()
}

fn default_week_start() -> Weekday {
    Weekday::Sun
}
