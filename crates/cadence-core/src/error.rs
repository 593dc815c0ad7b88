use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid interval: {0} (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Weekly rule has no valid weekdays")]
    EmptyWeekDays,

    #[error("Invalid weekday index: {0} (expected 0=Sunday..6=Saturday)")]
    InvalidWeekDay(u8),

    #[error("Rule end date {end} is before its start date {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rule not found: {0}")]
    NotFound(String),
}
