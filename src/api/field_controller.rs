use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use crate::core::{DateUnit, ResolveContext, date_math, resolve_date_text};
use crate::interaction::{ActiveField, SelectionType};
use crate::render::CalendarRenderer;

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Pushes typed input into an editable field buffer. Nothing is
    /// resolved until `check_dates` runs (on open, tab, enter, or
    /// commit paths).
    pub fn set_field_text(&mut self, field: ActiveField, text: impl Into<String>) {
        let text = text.into();
        trace!(field = ?field, text = %text, "field text updated");
        match field {
            ActiveField::Start => self.core.start_text = text,
            ActiveField::End => self.core.end_text = text,
            ActiveField::Single => self.core.current_text = text,
        }
    }

    #[must_use]
    pub fn field_text(&self, field: ActiveField) -> &str {
        match field {
            ActiveField::Start => &self.core.start_text,
            ActiveField::End => &self.core.end_text,
            ActiveField::Single => &self.core.current_text,
        }
    }

    /// Re-resolves the editable field texts into committed dates.
    ///
    /// Repair order for `Double` pickers: the `"ytd"` literal, then
    /// ordering repair anchored at the actively edited end (the 7-day
    /// week fallback), then bounds repair re-deriving a 7-day window at
    /// the bound that was hit, then the same-day rejection. Unresolved
    /// texts leave their committed value untouched. Idempotent: a
    /// second pass with no intervening edit changes nothing.
    pub fn check_dates(&mut self) {
        match self.core.selection_type {
            SelectionType::Single => self.check_dates_single(),
            SelectionType::Double => self.check_dates_double(),
        }
    }

    fn check_dates_single(&mut self) {
        let bounds = self.core.bounds;
        let resolved = {
            let ctx = self.resolve_context();
            resolve_date_text(&self.core.current_text, &ctx)
        };

        if let Some(current) = resolved {
            let clamped = bounds.clamp(current);
            if clamped != current {
                warn!(resolved = %current, clamped = %clamped, "current date clamped to bounds");
            }
            self.core.selection.set_current(Some(clamped));
        }
        self.sync_field_texts();
    }

    fn check_dates_double(&mut self) {
        let bounds = self.core.bounds;
        let today = self.core.today;
        let week_start = self.core.week_start;
        let active = self.core.active_or_default();

        let (current, mut start, mut end) = {
            let ctx = self.resolve_context();
            let current = resolve_date_text(self.field_text(active), &ctx);

            let year_to_date = self.core.start_text.trim().eq_ignore_ascii_case("ytd")
                || self.core.end_text.trim().eq_ignore_ascii_case("ytd");

            let (start, end) = if year_to_date {
                (
                    Some(date_math::start_of(today, DateUnit::Year, week_start)),
                    Some(today.min(bounds.latest())),
                )
            } else {
                (
                    resolve_date_text(&self.core.start_text, &ctx),
                    resolve_date_text(&self.core.end_text, &ctx),
                )
            };
            (current, start, end)
        };

        // Ordering repair: the actively edited end crossing the other
        // one forces a 7-day window instead of an error.
        if let (Some(c), Some(s)) = (current, start) {
            if c == s && end.is_some_and(|e| s > e) {
                let repaired = date_math::add(s, 6, DateUnit::Day);
                warn!(start = %s, end = %repaired, "start crossed end, week fallback applied");
                end = Some(repaired);
            }
        }
        if let (Some(c), Some(e)) = (current, end) {
            if c == e && start.is_some_and(|s| e < s) {
                let repaired = date_math::subtract(e, 6, DateUnit::Day);
                warn!(start = %repaired, end = %e, "end crossed start, week fallback applied");
                start = Some(repaired);
            }
        }

        // Bounds repair: any end outside the window re-derives a 7-day
        // window anchored at the bound that was hit.
        let earliest = bounds.earliest();
        let latest = bounds.latest();
        if start.is_some_and(|d| d < earliest) || end.is_some_and(|d| d < earliest) {
            start = Some(earliest);
            end = Some(bounds.clamp(date_math::add(earliest, 6, DateUnit::Day)));
            warn!(earliest = %earliest, "range clamped to earliest bound");
        }
        if start.is_some_and(|d| d > latest) || end.is_some_and(|d| d > latest) {
            start = Some(bounds.clamp(date_math::subtract(latest, 6, DateUnit::Day)));
            end = Some(latest);
            warn!(latest = %latest, "range clamped to latest bound");
        }

        if let (Some(s), Some(e)) = (start, end) {
            if s == e && !self.core.same_day_range {
                debug!(date = %s, "same-day range rejected, keeping committed state");
                self.sync_field_texts();
                return;
            }
        }

        if start.is_some() {
            self.core.selection.set_start(start);
        }
        if end.is_some() {
            self.core.selection.set_end(end);
        }

        // The grid anchor follows the post-repair value of the edited
        // end; anchoring on the raw resolved text would break the
        // idempotence of this pass.
        let anchor = match active {
            ActiveField::Start => self.core.selection.start(),
            ActiveField::End | ActiveField::Single => self.core.selection.end(),
        };
        if let Some(anchor) = anchor {
            self.core.selection.set_current(Some(anchor));
        } else if current.is_some() {
            self.core.selection.set_current(current);
        }
        self.sync_field_texts();
    }

    /// Rewrites the field buffers from committed state.
    pub(super) fn sync_field_texts(&mut self) {
        match self.core.selection_type {
            SelectionType::Double => {
                if let Some(start) = self.core.selection.start() {
                    self.core.start_text = date_math::format(start, &self.core.formats.input);
                }
                if let Some(end) = self.core.selection.end() {
                    self.core.end_text = date_math::format(end, &self.core.formats.input);
                }
            }
            SelectionType::Single => {
                // An empty non-required field stays empty.
                if self.core.current_text.is_empty() && !self.core.required {
                    return;
                }
                let text = self
                    .core
                    .selection
                    .current()
                    .map(|d| date_math::format(d, &self.core.formats.input))
                    .unwrap_or_default();
                if self.core.current_text != text {
                    self.core.current_text = text;
                }
            }
        }
    }

    /// Fires the change callback when committed values differ from the
    /// open-time snapshot; no-op commits never fire.
    pub fn commit(&mut self) {
        let selection = self.core.selection;
        let fire = match self.core.selection_type {
            SelectionType::Double => {
                selection.start() != selection.original().start
                    || selection.end() != selection.original().end
            }
            SelectionType::Single => {
                !self.core.current_text.is_empty()
                    && selection.current() != selection.original().current
            }
        };

        if !fire {
            trace!("commit skipped, no change against snapshot");
            return;
        }

        debug!(
            start = ?selection.start(),
            end = ?selection.end(),
            current = ?selection.current(),
            "selection committed"
        );
        let snapshot = selection.snapshot();
        if let Some(callback) = self.core.on_change.as_mut() {
            callback(snapshot);
        }
    }

    pub(super) fn resolve_context(&self) -> ResolveContext<'_> {
        ResolveContext {
            today: self.core.today,
            current: self.core.selection.current(),
            bounds: self.core.bounds,
            input_format: &self.core.formats.input,
            jump_year_format: &self.core.formats.jump_year,
        }
    }

    pub(super) fn format_input(&self, date: NaiveDate) -> String {
        date_math::format(date, &self.core.formats.input)
    }
}
