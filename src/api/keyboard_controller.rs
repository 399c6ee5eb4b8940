use tracing::trace;

use crate::core::{DateUnit, date_math};
use crate::interaction::{ActiveField, CloseMode, StepDirection, StepStride};
use crate::render::CalendarRenderer;

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Tab: resolves the current edit; on the start field, advances the
    /// session to the end field, otherwise commits and closes.
    pub fn key_tab(&mut self) {
        if self.core.selection.active_field() == Some(ActiveField::Start) {
            self.check_dates();
            self.open(ActiveField::End);
        } else {
            self.key_enter();
        }
    }

    /// Enter: resolves, commits, and fully closes.
    pub fn key_enter(&mut self) {
        self.check_dates();
        self.commit();
        self.close(CloseMode::Force);
    }

    /// Escape: cancels the session by restoring the rollback snapshot,
    /// then fully closes. No callback fires.
    pub fn key_escape(&mut self) {
        if !self.core.selection.cal_is_open() {
            return;
        }
        self.core.selection.restore_originals();
        self.sync_field_texts();
        self.close(CloseMode::Force);
    }

    /// Up/Down: steps the current date by day, week (shift), or month
    /// (meta) and live-updates the active field text without
    /// committing.
    pub fn key_step(&mut self, direction: StepDirection, stride: StepStride) {
        let unit = match stride {
            StepStride::Day => DateUnit::Day,
            StepStride::Week => DateUnit::Week,
            StepStride::Month => DateUnit::Month,
        };

        let anchor = self.core.selection.current().unwrap_or(self.core.today);
        let stepped = match direction {
            StepDirection::Back => date_math::subtract(anchor, 1, unit),
            StepDirection::Forward => date_math::add(anchor, 1, unit),
        };

        self.core.selection.set_current(Some(stepped));
        let text = self.format_input(stepped);
        let field = self.core.active_or_default();
        self.set_field_text(field, text);
        trace!(stepped = %stepped, "keyboard step");
    }
}
