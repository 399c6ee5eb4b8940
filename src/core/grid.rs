//! Month-grid projection.
//!
//! The grid is always exactly six full weeks (42 cells) regardless of
//! month length, which keeps the rendered height stable across
//! navigation.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::bounds::DateBounds;
use super::date_math::{self, DateUnit};

pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = GRID_WEEKS * 7;

/// One day cell of the projected month grid. Derived data, rebuilt on
/// every frame and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    /// Day-of-month label (1..=31).
    pub day_number: u32,
    pub is_start: bool,
    pub is_end: bool,
    pub is_current: bool,
    /// Strictly between start and end, exclusive on both ends.
    pub is_selected: bool,
    /// Outside the configured bounds; rendered but not selectable.
    pub is_outside_bounds: bool,
    /// Belongs to an adjacent month; muted but still selectable.
    pub is_outside_month: bool,
}

/// Projects the 42-cell grid for the month containing `reference`.
#[must_use]
pub fn build_month_grid(
    reference: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    current: Option<NaiveDate>,
    bounds: DateBounds,
    week_start: Weekday,
) -> Vec<GridCell> {
    let first_of_month = date_math::start_of(reference, DateUnit::Month, week_start);
    let range_start = date_math::start_of(first_of_month, DateUnit::Week, week_start);

    (0..GRID_CELLS)
        .map(|offset| {
            let date = date_math::add(range_start, offset as u32, DateUnit::Day);
            GridCell {
                date,
                day_number: date.day(),
                is_start: start == Some(date),
                is_end: end == Some(date),
                is_current: current == Some(date),
                is_selected: start
                    .zip(end)
                    .is_some_and(|(s, e)| date_math::is_between(date, s, e)),
                is_outside_bounds: !bounds.contains(date),
                is_outside_month: date.month() != reference.month()
                    || date.year() != reference.year(),
            }
        })
        .collect()
}
