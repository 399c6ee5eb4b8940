use chrono::NaiveDate;
use thiserror::Error;

pub type CalendarResult<T> = Result<T, CalendarError>;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid bounds: earliest {earliest} is after latest {latest}")]
    InvalidBounds {
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("invalid {field} format pattern: {pattern:?}")]
    InvalidFormat { field: &'static str, pattern: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),
}
