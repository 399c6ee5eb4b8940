use chrono::NaiveDate;

use crate::core::{DateUnit, build_month_grid, date_math};
use crate::render::{CalendarFrame, CalendarRenderer, SwitcherState};

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Materializes the deterministic projection of the current state:
    /// grid cells (while open), field texts, switcher labels and
    /// enabled flags, preset rows, and the live hover preview.
    #[must_use]
    pub fn frame(&self) -> CalendarFrame {
        let reference = self.grid_reference();
        let selection = self.core.selection;

        let cells = if selection.cal_is_open() {
            build_month_grid(
                reference,
                selection.start(),
                selection.end(),
                selection
                    .current()
                    .or(selection.start())
                    .or(selection.end()),
                self.core.bounds,
                self.core.week_start,
            )
        } else {
            Vec::new()
        };

        CalendarFrame {
            is_open: selection.cal_is_open(),
            preset_is_open: selection.preset_is_open(),
            cells,
            weekday_labels: self.rotated_weekday_labels(),
            switcher: self.switcher_state(reference),
            start_text: self.core.start_text.clone(),
            end_text: self.core.end_text.clone(),
            current_text: self.core.current_text.clone(),
            placeholder: self.core.placeholder.clone(),
            presets: self.resolved_presets(),
            preview: selection.hover(),
        }
    }

    fn switcher_state(&self, reference: NaiveDate) -> SwitcherState {
        let week_start = self.core.week_start;
        let next_month = date_math::start_of(
            date_math::add(reference, 1, DateUnit::Month),
            DateUnit::Month,
            week_start,
        );
        let prev_month = date_math::end_of(
            date_math::subtract(reference, 1, DateUnit::Month),
            DateUnit::Month,
            week_start,
        );
        let next_year = date_math::start_of(
            date_math::add(reference, 1, DateUnit::Year),
            DateUnit::Month,
            week_start,
        );
        let prev_year = date_math::end_of(
            date_math::subtract(reference, 1, DateUnit::Year),
            DateUnit::Month,
            week_start,
        );

        let earliest = self.core.bounds.earliest();
        let latest = self.core.bounds.latest();

        SwitcherState {
            month_label: date_math::format(reference, &self.core.formats.jump_month),
            year_label: date_math::format(reference, &self.core.formats.jump_year),
            prev_month_enabled: prev_month >= earliest,
            next_month_enabled: next_month <= latest,
            prev_year_enabled: prev_year >= earliest,
            next_year_enabled: next_year <= latest,
        }
    }

    fn rotated_weekday_labels(&self) -> Vec<String> {
        let shift = self.core.week_start.num_days_from_sunday() as usize;
        (0..7)
            .map(|i| self.core.weekday_labels[(shift + i) % 7].clone())
            .collect()
    }
}
