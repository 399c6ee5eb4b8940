use crate::error::CalendarResult;
use crate::render::{CalendarFrame, CalendarRenderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch malformed
/// projections before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_cell_count: usize,
    pub last_preset_count: usize,
}

impl CalendarRenderer for NullRenderer {
    fn render(&mut self, frame: &CalendarFrame) -> CalendarResult<()> {
        frame.validate()?;
        self.last_cell_count = frame.cells.len();
        self.last_preset_count = frame.presets.len();
        Ok(())
    }
}
