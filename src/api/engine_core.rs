use chrono::{NaiveDate, Weekday};

use crate::core::DateBounds;
use crate::interaction::{ActiveField, SelectionSnapshot, SelectionState, SelectionType};

use super::PresetSource;

/// Resolved strftime patterns, validated at construction.
pub(super) struct FormatSet {
    pub(super) input: String,
    pub(super) preset: String,
    pub(super) jump_month: String,
    pub(super) jump_year: String,
}

/// Internal engine state used by the public facade (`CalendarEngine`).
pub(super) struct EngineCore {
    pub(super) selection_type: SelectionType,
    pub(super) required: bool,
    pub(super) same_day_range: bool,
    pub(super) formats: FormatSet,
    pub(super) placeholder: String,
    /// Sunday-first; rotated to the configured week start per frame.
    pub(super) weekday_labels: Vec<String>,
    pub(super) week_start: Weekday,
    pub(super) bounds: DateBounds,
    /// Whether `latest_date` was configured explicitly; built-in
    /// presets anchor at the reference today otherwise.
    pub(super) latest_is_explicit: bool,
    pub(super) preset_source: PresetSource,
    pub(super) selection: SelectionState,
    /// Editable field buffers owned by the engine; hosts push typed
    /// input into them and read them back off each frame.
    pub(super) start_text: String,
    pub(super) end_text: String,
    pub(super) current_text: String,
    /// Month/year switcher target while navigating.
    pub(super) nav_anchor: Option<NaiveDate>,
    /// Reference "today" for keyword resolution and preset anchoring.
    pub(super) today: NaiveDate,
    pub(super) on_change: Option<Box<dyn FnMut(SelectionSnapshot)>>,
}

impl EngineCore {
    pub(super) fn default_field(&self) -> ActiveField {
        match self.selection_type {
            SelectionType::Single => ActiveField::Single,
            SelectionType::Double => ActiveField::Start,
        }
    }

    pub(super) fn active_or_default(&self) -> ActiveField {
        self.selection
            .active_field()
            .unwrap_or_else(|| self.default_field())
    }
}
