//! Errors raised by the trace analysis components

use serde::Serialize;
use thiserror::Error;

/// Analysis errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisError {
    #[error("No records to analyze")]
    EmptyInput,

    #[error("Need at least {required} records, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("No probes were lost; probability after a loss is not applicable")]
    DivisionByZero,

    #[error("Sequence modulus must be at least 2, got {0}")]
    InvalidModulus(u32),
}

/// Reject traces shorter than `required` records
pub(crate) fn require_records(actual: usize, required: usize) -> Result<(), AnalysisError> {
    if actual == 0 {
        Err(AnalysisError::EmptyInput)
    } else if actual < required {
        Err(AnalysisError::InsufficientData { required, actual })
    } else {
        Ok(())
    }
}
