use thiserror::Error;

/// Errors that can occur while computing a subsidy schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid schedule parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("arithmetic overflow while computing the schedule: {0}")]
    CalculationOverflow(&'static str),
}
