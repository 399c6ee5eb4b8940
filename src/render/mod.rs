mod frame;
mod null_renderer;

pub use frame::{CalendarFrame, SwitcherState};
pub use null_renderer::NullRenderer;

use crate::error::CalendarResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `CalendarFrame`
/// so markup and styling code remains isolated from selection and
/// date-resolution logic.
pub trait CalendarRenderer {
    fn render(&mut self, frame: &CalendarFrame) -> CalendarResult<()>;
}
