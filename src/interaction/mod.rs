use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::PreviewRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionType {
    /// One editable field driving `current_date`.
    Single,
    /// Start/end pair with two editable fields.
    Double,
}

/// The field a pointer or keyboard edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveField {
    Start,
    End,
    Single,
}

/// How a close request behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseMode {
    /// Closes only when no preset panel is open.
    Default,
    /// Always fully closes and clears transient state.
    Force,
    /// Pseudo-close used while navigating months/years: keeps the
    /// logical open state so the grid rebuilds in place.
    Switcher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Back,
    Forward,
}

/// Stride of a keyboard step on the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStride {
    Day,
    Week,
    Month,
}

impl StepStride {
    /// Maps key modifiers to a stride; the month modifier wins.
    #[must_use]
    pub fn from_modifiers(shift: bool, meta: bool) -> Self {
        if meta {
            Self::Month
        } else if shift {
            Self::Week
        } else {
            Self::Day
        }
    }
}

/// Committed selection values handed to the change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub current: Option<NaiveDate>,
}

/// Mutable selection record of one picker instance.
///
/// Committed values live here together with the rollback snapshot
/// (`orig_*`) taken when an editing session opens, the open/active
/// flags, and the transient hover preview. Hover state is always
/// discarded before a new editing session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    current: Option<NaiveDate>,
    orig_start: Option<NaiveDate>,
    orig_end: Option<NaiveDate>,
    orig_current: Option<NaiveDate>,
    cal_is_open: bool,
    preset_is_open: bool,
    active_field: Option<ActiveField>,
    hover: Option<PreviewRange>,
}

impl SelectionState {
    #[must_use]
    pub fn start(self) -> Option<NaiveDate> {
        self.start
    }

    #[must_use]
    pub fn end(self) -> Option<NaiveDate> {
        self.end
    }

    #[must_use]
    pub fn current(self) -> Option<NaiveDate> {
        self.current
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.end = end;
    }

    pub fn set_current(&mut self, current: Option<NaiveDate>) {
        self.current = current;
    }

    #[must_use]
    pub fn cal_is_open(self) -> bool {
        self.cal_is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.cal_is_open = open;
        if !open {
            self.hover = None;
        }
    }

    #[must_use]
    pub fn preset_is_open(self) -> bool {
        self.preset_is_open
    }

    pub fn set_preset_open(&mut self, open: bool) {
        self.preset_is_open = open;
    }

    #[must_use]
    pub fn active_field(self) -> Option<ActiveField> {
        self.active_field
    }

    pub fn set_active_field(&mut self, field: Option<ActiveField>) {
        self.active_field = field;
    }

    #[must_use]
    pub fn hover(self) -> Option<PreviewRange> {
        self.hover
    }

    pub fn set_hover(&mut self, preview: Option<PreviewRange>) {
        self.hover = preview;
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    #[must_use]
    pub fn snapshot(self) -> SelectionSnapshot {
        SelectionSnapshot {
            start: self.start,
            end: self.end,
            current: self.current,
        }
    }

    #[must_use]
    pub fn original(self) -> SelectionSnapshot {
        SelectionSnapshot {
            start: self.orig_start,
            end: self.orig_end,
            current: self.orig_current,
        }
    }

    /// Records the rollback point for the editing session being opened.
    pub fn snapshot_originals(&mut self) {
        self.orig_start = self.start;
        self.orig_end = self.end;
        self.orig_current = self.current;
    }

    /// Restores the rollback point; the cancellation path.
    pub fn restore_originals(&mut self) {
        self.start = self.orig_start;
        self.end = self.orig_end;
        self.current = self.orig_current;
    }

    /// Whether a commit would observe a change.
    #[must_use]
    pub fn differs_from_original(self) -> bool {
        self.snapshot() != self.original()
    }
}
