use serde::{Deserialize, Serialize};

use crate::core::{GRID_CELLS, GridCell, PreviewRange, ResolvedPreset};
use crate::error::{CalendarError, CalendarResult};

/// Month/year jump controls: labels plus whether each arrow may fire.
///
/// An arrow is disabled exactly when the adjacent month or year lies
/// wholly outside the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitcherState {
    pub month_label: String,
    pub year_label: String,
    pub prev_month_enabled: bool,
    pub next_month_enabled: bool,
    pub prev_year_enabled: bool,
    pub next_year_enabled: bool,
}

/// Backend-agnostic projection of one picker state.
///
/// The engine materializes everything a UI layer needs — cells, field
/// texts, switcher labels, preset rows — so rendering code stays free
/// of calendar logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFrame {
    pub is_open: bool,
    pub preset_is_open: bool,
    /// Empty while closed, exactly 42 cells while open.
    pub cells: Vec<GridCell>,
    /// Seven labels, rotated so index 0 is the configured week start.
    pub weekday_labels: Vec<String>,
    pub switcher: SwitcherState,
    pub start_text: String,
    pub end_text: String,
    pub current_text: String,
    pub placeholder: String,
    pub presets: Vec<ResolvedPreset>,
    /// The live hover preview, if a pointer rests on a candidate cell.
    pub preview: Option<PreviewRange>,
}

impl CalendarFrame {
    pub fn validate(&self) -> CalendarResult<()> {
        if !self.cells.is_empty() && self.cells.len() != GRID_CELLS {
            return Err(CalendarError::InvalidFrame(format!(
                "grid must carry {GRID_CELLS} cells, got {}",
                self.cells.len()
            )));
        }

        if self.weekday_labels.len() != 7 {
            return Err(CalendarError::InvalidFrame(format!(
                "expected 7 weekday labels, got {}",
                self.weekday_labels.len()
            )));
        }

        Ok(())
    }
}
