// Errors raised by trend fitting and projection
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrendError {
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("degenerate input: all observations share the same year")]
    DegenerateInput,

    #[error("invalid projection range: start {start} is after end {end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("non-finite measurement for year {year}")]
    NonFiniteValue { year: i32 },
}
