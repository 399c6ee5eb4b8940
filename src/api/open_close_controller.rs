use chrono::NaiveDate;
use tracing::debug;

use crate::interaction::{ActiveField, CloseMode};
use crate::render::CalendarRenderer;

use super::CalendarEngine;

impl<R: CalendarRenderer> CalendarEngine<R> {
    /// Opens an editing session on `field`.
    ///
    /// Opening is an implicit preview cancellation: any stale hover
    /// state is discarded before the new session starts. A fresh open
    /// (calendar previously closed) records the rollback snapshot;
    /// re-opening while open first performs a close so the snapshot
    /// survives field switches.
    pub fn open(&mut self, field: ActiveField) {
        self.open_with_anchor(field, None);
    }

    pub(super) fn open_with_anchor(&mut self, field: ActiveField, nav_anchor: Option<NaiveDate>) {
        self.core.selection.clear_hover();

        if self.core.selection.preset_is_open() {
            self.preset_toggle();
        }

        if self.core.selection.cal_is_open() {
            let mode = if nav_anchor.is_some() {
                CloseMode::Switcher
            } else {
                CloseMode::Default
            };
            self.close(mode);
        } else {
            // Fresh session: record the rollback point escape and
            // no-op commits compare against.
            self.core.selection.snapshot_originals();
        }

        self.core.selection.set_active_field(Some(field));
        self.core.nav_anchor = nav_anchor;
        self.check_dates();
        self.core.selection.set_open(true);

        debug!(field = ?field, nav_anchor = ?nav_anchor, "calendar opened");
    }

    /// Closes the calendar.
    ///
    /// `Switcher` is the transient pseudo-close used while navigating
    /// months/years: logical open state survives and the grid rebuilds
    /// in place. `Default` backs off while the preset panel is open;
    /// `Force` always fully closes.
    pub fn close(&mut self, mode: CloseMode) {
        match mode {
            CloseMode::Switcher => return,
            CloseMode::Default if self.core.selection.preset_is_open() => return,
            CloseMode::Default | CloseMode::Force => {}
        }

        self.core.selection.set_open(false);
        self.core.nav_anchor = None;
        debug!(mode = ?mode, "calendar closed");
    }

    /// Entry point for the host's "focus left the widget boundary"
    /// event. Commits when the end field was being edited, then fully
    /// closes; pending unresolved text edits are discarded.
    pub fn focus_left(&mut self) {
        if self.core.selection.preset_is_open() {
            self.preset_toggle();
        }

        if self.core.selection.cal_is_open() {
            if self.core.selection.active_field() == Some(ActiveField::End) {
                self.commit();
            }
            self.sync_field_texts();
            self.close(CloseMode::Force);
        }
    }
}
