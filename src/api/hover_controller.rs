use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::{PreviewField, PreviewRange, preview_range};
use crate::interaction::{ActiveField, CloseMode};
use crate::render::CalendarRenderer;

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Pointer rests on a candidate cell: computes the transient
    /// "maybe" range. Committed state is never touched; the preview is
    /// discarded on leave and only materializes on `select_cell`.
    pub fn hover_enter(&mut self, date: NaiveDate) {
        if !self.core.selection.cal_is_open() || !self.core.bounds.contains(date) {
            return;
        }

        let preview = match self.core.active_or_default() {
            ActiveField::Start => preview_range(
                PreviewField::Start,
                date,
                self.core.selection.start(),
                self.core.selection.end(),
                self.core.same_day_range,
                self.core.bounds,
            ),
            ActiveField::End => preview_range(
                PreviewField::End,
                date,
                self.core.selection.start(),
                self.core.selection.end(),
                self.core.same_day_range,
                self.core.bounds,
            ),
            ActiveField::Single => Some(PreviewRange::single(date)),
        };

        trace!(hovered = %date, preview = ?preview, "hover preview");
        self.core.selection.set_hover(preview);
    }

    /// Pointer left the grid: the preview is discarded.
    pub fn hover_leave(&mut self) {
        self.core.selection.clear_hover();
    }

    /// Pointer-down on a cell: materializes the hovered date into the
    /// active field. Editing the start auto-advances the session to the
    /// end field; the end (or single) field commits and closes.
    pub fn select_cell(&mut self, date: NaiveDate) {
        if !self.core.selection.cal_is_open() || !self.core.bounds.contains(date) {
            return;
        }

        let field = self.core.active_or_default();
        let hint = self
            .core
            .selection
            .hover()
            .and_then(|preview| preview.other_end_hint);

        if let Some(hint) = hint {
            let other = match field {
                ActiveField::Start => ActiveField::End,
                ActiveField::End => ActiveField::Start,
                ActiveField::Single => ActiveField::Single,
            };
            if other != field {
                let text = self.format_input(hint);
                self.set_field_text(other, text);
            }
        }

        let text = self.format_input(date);
        self.set_field_text(field, text);
        debug!(selected = %date, field = ?field, "cell selected");

        self.open(field);

        if field == ActiveField::Start {
            self.open(ActiveField::End);
        } else {
            self.commit();
            self.close(CloseMode::Force);
        }
    }
}
