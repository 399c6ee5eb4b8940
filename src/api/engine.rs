use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::core::{DateBounds, DateUnit, date_math};
use crate::error::{CalendarError, CalendarResult};
use crate::interaction::{ActiveField, SelectionSnapshot, SelectionState, SelectionType};
use crate::render::CalendarRenderer;

use super::engine_config::{default_earliest, default_latest, default_weekday_labels};
use super::engine_core::{EngineCore, FormatSet};
use super::{CalendarEngineConfig, PresetSource};

/// Main orchestration facade consumed by host applications.
///
/// `CalendarEngine` coordinates the selection state machine, free-text
/// date resolution, month-grid projection, and renderer calls. All
/// transitions are synchronous; there is no background work.
pub struct CalendarEngine<R: CalendarRenderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: CalendarRenderer> CalendarEngine<R> {
    pub fn new(renderer: R, config: CalendarEngineConfig) -> CalendarResult<Self> {
        let formats = validate_formats(&config)?;

        let bounds = DateBounds::new(
            config.earliest_date.unwrap_or_else(default_earliest),
            config.latest_date.unwrap_or_else(default_latest),
        )?;

        let today = Local::now().date_naive();
        let mut selection = SelectionState::default();

        match config.selection_type {
            SelectionType::Double => {
                let end = bounds.clamp(config.end_date.unwrap_or(today));
                let start = bounds.clamp(
                    config
                        .start_date
                        .unwrap_or_else(|| date_math::subtract(end, 1, DateUnit::Month)),
                );
                selection.set_start(Some(start));
                selection.set_end(Some(end));
                selection.set_current(config.current_date.map(|d| bounds.clamp(d)));
            }
            SelectionType::Single => {
                let current = bounds.clamp(config.current_date.unwrap_or(today));
                selection.set_current(Some(current));
            }
        }

        let weekday_labels = match config.weekday_labels {
            Some(labels) if labels.len() == 7 => labels,
            Some(labels) => {
                warn!(
                    count = labels.len(),
                    "expected 7 weekday labels, using defaults"
                );
                default_weekday_labels()
            }
            None => default_weekday_labels(),
        };

        let preset_source = match config.selection_type {
            SelectionType::Single => PresetSource::Disabled,
            SelectionType::Double => config.presets,
        };

        let placeholder = config
            .placeholder
            .unwrap_or_else(|| formats.input.clone());

        let (start_text, end_text, current_text) = match config.selection_type {
            SelectionType::Double => (
                selection
                    .start()
                    .map(|d| date_math::format(d, &formats.input))
                    .unwrap_or_default(),
                selection
                    .end()
                    .map(|d| date_math::format(d, &formats.input))
                    .unwrap_or_default(),
                String::new(),
            ),
            SelectionType::Single => {
                // The field starts empty unless a current date was
                // configured explicitly.
                let text = match (config.current_date, selection.current()) {
                    (Some(_), Some(current)) => date_math::format(current, &formats.input),
                    _ => String::new(),
                };
                (String::new(), String::new(), text)
            }
        };

        debug!(
            selection_type = ?config.selection_type,
            earliest = %bounds.earliest(),
            latest = %bounds.latest(),
            "calendar engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                selection_type: config.selection_type,
                required: config.required,
                same_day_range: config.same_day_range,
                formats,
                placeholder,
                weekday_labels,
                week_start: config.week_start,
                bounds,
                latest_is_explicit: config.latest_date.is_some(),
                preset_source,
                selection,
                start_text,
                end_text,
                current_text,
                nav_anchor: None,
                today,
                on_change: None,
            },
        })
    }

    /// Registers the commit callback. It fires only when a commit
    /// observes values that differ from the open-time snapshot.
    pub fn set_on_change(&mut self, callback: impl FnMut(SelectionSnapshot) + 'static) {
        self.core.on_change = Some(Box::new(callback));
    }

    /// Overrides the reference "today" used by keyword resolution and
    /// built-in preset anchoring. Defaults to the local calendar day.
    pub fn set_reference_today(&mut self, today: NaiveDate) {
        self.core.today = today;
    }

    #[must_use]
    pub fn selection_type(&self) -> SelectionType {
        self.core.selection_type
    }

    #[must_use]
    pub fn bounds(&self) -> DateBounds {
        self.core.bounds
    }

    #[must_use]
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.core.selection.start()
    }

    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.core.selection.end()
    }

    #[must_use]
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.core.selection.current()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionSnapshot {
        self.core.selection.snapshot()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.core.selection.cal_is_open()
    }

    #[must_use]
    pub fn preset_is_open(&self) -> bool {
        self.core.selection.preset_is_open()
    }

    #[must_use]
    pub fn active_field(&self) -> Option<ActiveField> {
        self.core.selection.active_field()
    }

    /// Renders the current frame through the attached backend.
    pub fn render(&mut self) -> CalendarResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn validate_formats(config: &CalendarEngineConfig) -> CalendarResult<FormatSet> {
    let patterns = [
        ("input", &config.input_format),
        ("preset", &config.preset_format),
        ("jump_month", &config.jump_month_format),
        ("jump_year", &config.jump_year_format),
    ];

    for (field, pattern) in patterns {
        if !date_math::validate_pattern(pattern) {
            return Err(CalendarError::InvalidFormat {
                field,
                pattern: pattern.clone(),
            });
        }
    }

    Ok(FormatSet {
        input: config.input_format.clone(),
        preset: config.preset_format.clone(),
        jump_month: config.jump_month_format.clone(),
        jump_year: config.jump_year_format.clone(),
    })
}
