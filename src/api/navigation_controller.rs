use chrono::NaiveDate;
use tracing::debug;

use crate::core::{DateUnit, date_math};
use crate::interaction::StepDirection;
use crate::render::CalendarRenderer;

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Re-opens on the adjacent month via the switcher pseudo-close.
    pub fn navigate_month(&mut self, direction: StepDirection) {
        self.navigate(direction, DateUnit::Month);
    }

    /// Re-opens on the same month of the adjacent year.
    pub fn navigate_year(&mut self, direction: StepDirection) {
        self.navigate(direction, DateUnit::Year);
    }

    fn navigate(&mut self, direction: StepDirection, unit: DateUnit) {
        if !self.core.selection.cal_is_open() {
            return;
        }

        let displayed = date_math::start_of(
            self.grid_reference(),
            DateUnit::Month,
            self.core.week_start,
        );
        let target = match direction {
            StepDirection::Back => date_math::subtract(displayed, 1, unit),
            StepDirection::Forward => date_math::add(displayed, 1, unit),
        };

        let field = self.core.active_or_default();
        debug!(direction = ?direction, target = %target, "switcher navigation");
        self.open_with_anchor(field, Some(target));
    }

    /// The month anchor the grid and switcher labels derive from: the
    /// navigation target while switching, else the current date, else
    /// the selection ends, else today.
    pub(super) fn grid_reference(&self) -> NaiveDate {
        self.core
            .nav_anchor
            .or(self.core.selection.current())
            .or(self.core.selection.start())
            .or(self.core.selection.end())
            .unwrap_or(self.core.today)
    }
}
