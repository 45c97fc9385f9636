//! Conditional delivery probabilities
//!
//! Estimates how likely a probe is to be answered given what happened to the
//! probe just before it. Only interior records (neither first nor last in
//! the trace) are classified.

use crate::error::{require_records, AnalysisError};
use crate::record::LogRecord;
use crate::sequence::SeqSpace;
use serde::Serialize;

/// Conditional delivery probabilities, as percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionalProbabilities {
    /// Probe N+1 answered given probe N was answered
    pub given_prev_delivered: f64,
    /// Probe N+1 answered given probe N was lost
    pub given_prev_lost: f64,
    /// Interior records whose predecessor step was a gap of 0 or 1
    pub delivered_after_delivery: u64,
    /// Interior records that directly follow a loss
    pub delivered_after_loss: u64,
    /// Number of records classified (all but the first and last)
    pub interior_count: u64,
    /// Number of records in the trace
    pub total_count: u64,
}

impl ConditionalProbabilities {
    /// Share of interior records preceded by a delivery, as a percentage
    pub fn prev_delivered_share(&self) -> f64 {
        share(self.delivered_after_delivery, self.interior_count)
    }

    /// Share of interior records preceded by a loss, as a percentage
    pub fn prev_lost_share(&self) -> f64 {
        share(self.delivered_after_loss, self.interior_count)
    }
}

fn share(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Estimate conditional delivery probabilities
///
/// `loss_count` is the total from [`crate::gap::analyze_gaps`] over the same
/// records. Requires at least three records and at least one loss.
pub fn estimate_probabilities(
    records: &[LogRecord],
    loss_count: u64,
    space: &SeqSpace,
) -> Result<ConditionalProbabilities, AnalysisError> {
    require_records(records.len(), 3)?;
    if loss_count == 0 {
        return Err(AnalysisError::DivisionByZero);
    }

    let mut delivered_after_delivery = 0u64;
    let mut delivered_after_loss = 0u64;

    // Windows of two over all but the last record: (prev, interior)
    for pair in records[..records.len() - 1].windows(2) {
        if space.gap(pair[0].seq(), pair[1].seq()) > 1 {
            delivered_after_loss += 1;
        } else {
            delivered_after_delivery += 1;
        }
    }

    let total_count = records.len() as u64;
    let interior_count = delivered_after_delivery + delivered_after_loss;

    tracing::debug!(
        delivered_after_delivery,
        delivered_after_loss,
        interior_count,
        "conditional probabilities estimated"
    );

    Ok(ConditionalProbabilities {
        given_prev_delivered: delivered_after_delivery as f64 / total_count as f64 * 100.0,
        given_prev_lost: delivered_after_loss as f64 / loss_count as f64 * 100.0,
        delivered_after_delivery,
        delivered_after_loss,
        interior_count,
        total_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap::analyze_gaps;
    use crate::sequence::SeqNumber;
    use chrono::DateTime;

    fn trace(seqs: &[u32]) -> Vec<LogRecord> {
        seqs.iter()
            .enumerate()
            .map(|(i, &s)| {
                let ts = DateTime::from_timestamp(1_700_000_000 + i as i64, 0).unwrap();
                LogRecord::new(ts, SeqNumber::new(s), 15)
            })
            .collect()
    }

    #[test]
    fn test_basic_estimate() {
        let records = trace(&[0, 1, 2, 5, 6, 7, 10]);
        let space = SeqSpace::default();
        let gaps = analyze_gaps(&records, &space).unwrap();
        let p = estimate_probabilities(&records, gaps.loss_count, &space).unwrap();

        // Interior records: 1, 2, 5, 6, 7 -> only 5 follows a loss
        assert_eq!(p.interior_count, 5);
        assert_eq!(p.delivered_after_loss, 1);
        assert_eq!(p.delivered_after_delivery, 4);
        assert_eq!(p.total_count, 7);
        assert!((p.given_prev_delivered - 4.0 / 7.0 * 100.0).abs() < 1e-9);
        assert!((p.given_prev_lost - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_last_record_not_classified() {
        // The only loss is right before the final record
        let records = trace(&[0, 1, 2, 9]);
        let p = estimate_probabilities(&records, 6, &SeqSpace::default()).unwrap();
        assert_eq!(p.delivered_after_loss, 0);
        assert_eq!(p.delivered_after_delivery, 2);
        assert_eq!(p.given_prev_lost, 0.0);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let records = trace(&[3, 4, 8, 9, 15, 16, 17]);
        let p = estimate_probabilities(&records, 8, &SeqSpace::default()).unwrap();
        assert!((p.prev_delivered_share() + p.prev_lost_share() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_loss_free_is_not_applicable() {
        let records = trace(&[10, 11, 12, 13]);
        let err = estimate_probabilities(&records, 0, &SeqSpace::default()).unwrap_err();
        assert_eq!(err, AnalysisError::DivisionByZero);
    }

    #[test]
    fn test_too_few_records() {
        let err = estimate_probabilities(&trace(&[0, 4]), 3, &SeqSpace::default()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
        let err = estimate_probabilities(&[], 3, &SeqSpace::default()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyInput);
    }

    #[test]
    fn test_wraparound_counts_as_delivery() {
        let records = trace(&[65_534, 65_535, 0, 4, 5]);
        let p = estimate_probabilities(&records, 3, &SeqSpace::default()).unwrap();
        assert_eq!(p.delivered_after_delivery, 2);
        assert_eq!(p.delivered_after_loss, 1);
    }
}
