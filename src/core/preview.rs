//! Hover-preview ("maybe") range computation.
//!
//! Pure and DOM-free: the engine calls this while the pointer rests on
//! a candidate cell, and the result is discarded on pointer-leave. It
//! never touches committed selection state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bounds::DateBounds;
use super::date_math::{self, DateUnit};

/// Which end of the range the preview extends from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewField {
    Start,
    End,
}

/// A transient candidate range shown while hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// When the hovered date crosses the other committed end, the
    /// value the opposite field would be rewritten to on commit.
    pub other_end_hint: Option<NaiveDate>,
}

impl PreviewRange {
    /// Single-cell preview used when no opposite end is committed.
    #[must_use]
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
            other_end_hint: None,
        }
    }
}

/// Computes the preview for `hovered` while `field` is being edited.
///
/// The range extends from the hovered cell toward the committed
/// opposite end. When the hovered cell crosses that end, the window is
/// capped at seven days total and stops at the configured bounds, and
/// `other_end_hint` carries the capped opposite value.
#[must_use]
pub fn preview_range(
    field: PreviewField,
    hovered: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    same_day_range: bool,
    bounds: DateBounds,
) -> Option<PreviewRange> {
    match field {
        PreviewField::Start => match end {
            Some(committed_end) if hovered > committed_end => {
                let capped = bounds
                    .latest()
                    .min(date_math::add(hovered, 6, DateUnit::Day));
                Some(PreviewRange {
                    start: hovered,
                    end: capped,
                    other_end_hint: Some(capped),
                })
            }
            Some(committed_end) => {
                if hovered == committed_end && !same_day_range {
                    return None;
                }
                Some(PreviewRange {
                    start: hovered,
                    end: committed_end,
                    other_end_hint: None,
                })
            }
            None => Some(PreviewRange::single(hovered)),
        },
        PreviewField::End => match start {
            Some(committed_start) if hovered < committed_start => {
                let capped = bounds
                    .earliest()
                    .max(date_math::subtract(hovered, 6, DateUnit::Day));
                Some(PreviewRange {
                    start: capped,
                    end: hovered,
                    other_end_hint: Some(capped),
                })
            }
            Some(committed_start) => {
                if hovered == committed_start && !same_day_range {
                    return None;
                }
                Some(PreviewRange {
                    start: committed_start,
                    end: hovered,
                    other_end_hint: None,
                })
            }
            None => Some(PreviewRange::single(hovered)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
    }

    fn bounds() -> DateBounds {
        DateBounds::new(d(2020, 1, 1), d(2020, 12, 31)).expect("bounds")
    }

    #[test]
    fn start_preview_extends_to_committed_end() {
        let preview = preview_range(
            PreviewField::Start,
            d(2020, 6, 5),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            false,
            bounds(),
        )
        .expect("preview");

        assert_eq!(preview.start, d(2020, 6, 5));
        assert_eq!(preview.end, d(2020, 6, 20));
        assert_eq!(preview.other_end_hint, None);
    }

    #[test]
    fn crossing_the_end_caps_the_window_at_seven_days() {
        let preview = preview_range(
            PreviewField::Start,
            d(2020, 6, 25),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            false,
            bounds(),
        )
        .expect("preview");

        assert_eq!(preview.start, d(2020, 6, 25));
        assert_eq!(preview.end, d(2020, 7, 1));
        assert_eq!(preview.other_end_hint, Some(d(2020, 7, 1)));
    }

    #[test]
    fn crossing_window_stops_at_the_latest_bound() {
        let preview = preview_range(
            PreviewField::Start,
            d(2020, 12, 29),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            false,
            bounds(),
        )
        .expect("preview");

        assert_eq!(preview.end, d(2020, 12, 31));
        assert_eq!(preview.other_end_hint, Some(d(2020, 12, 31)));
    }

    #[test]
    fn end_preview_mirrors_the_start_rules() {
        let preview = preview_range(
            PreviewField::End,
            d(2020, 5, 20),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            false,
            bounds(),
        )
        .expect("preview");

        assert_eq!(preview.start, d(2020, 5, 14));
        assert_eq!(preview.end, d(2020, 5, 20));
        assert_eq!(preview.other_end_hint, Some(d(2020, 5, 14)));
    }

    #[test]
    fn same_day_hover_is_suppressed_unless_allowed() {
        let same_day = preview_range(
            PreviewField::Start,
            d(2020, 6, 20),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            false,
            bounds(),
        );
        assert_eq!(same_day, None);

        let allowed = preview_range(
            PreviewField::Start,
            d(2020, 6, 20),
            Some(d(2020, 6, 1)),
            Some(d(2020, 6, 20)),
            true,
            bounds(),
        )
        .expect("preview");
        assert_eq!(allowed.start, d(2020, 6, 20));
        assert_eq!(allowed.end, d(2020, 6, 20));
    }

    #[test]
    fn no_committed_opposite_end_previews_a_single_cell() {
        let preview = preview_range(
            PreviewField::Start,
            d(2020, 6, 5),
            None,
            None,
            false,
            bounds(),
        )
        .expect("preview");
        assert_eq!(preview, PreviewRange::single(d(2020, 6, 5)));
    }
}
