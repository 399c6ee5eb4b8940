use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// The configured `[earliest, latest]` window outside which no
/// selectable date may exist.
///
/// Clamping is always explicit: every date-producing operation in the
/// engine and the preset resolver pushes its result through [`clamp`]
/// rather than relying on a global guard.
///
/// [`clamp`]: DateBounds::clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl DateBounds {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> CalendarResult<Self> {
        if earliest > latest {
            return Err(CalendarError::InvalidBounds { earliest, latest });
        }
        Ok(Self { earliest, latest })
    }

    #[must_use]
    pub fn earliest(self) -> NaiveDate {
        self.earliest
    }

    #[must_use]
    pub fn latest(self) -> NaiveDate {
        self.latest
    }

    /// Pulls `date` to the nearest edge of the window; identity when
    /// already inside.
    #[must_use]
    pub fn clamp(self, date: NaiveDate) -> NaiveDate {
        if date < self.earliest {
            self.earliest
        } else if date > self.latest {
            self.latest
        } else {
            date
        }
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }
}
