//! Whole-trace summary
//!
//! Runs every analysis over one trace and keeps the results together for
//! reporting.

use crate::error::AnalysisError;
use crate::gap::{analyze_gaps, GapAnalysis};
use crate::probability::{estimate_probabilities, ConditionalProbabilities};
use crate::record::LogRecord;
use crate::rtt::{rtt_distribution, rtt_series, successive_rtt_pairs, RttBucket, RttStats};
use crate::sequence::SeqSpace;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete analysis of a probe trace
#[derive(Debug, Clone, Serialize)]
pub struct TraceSummary {
    /// Modulus the trace was analyzed under
    pub modulus: u32,
    /// Probes sent (answered plus lost)
    pub sent: u64,
    /// Probes answered
    pub received: u64,
    /// Probes lost
    pub lost: u64,
    /// Answered share of sent probes, as a percentage
    pub delivery_rate: f64,
    pub gaps: GapAnalysis,
    /// Fails with [`AnalysisError::DivisionByZero`] on a loss-free trace
    pub probabilities: Result<ConditionalProbabilities, AnalysisError>,
    pub rtt: Option<RttStats>,
    pub distribution: Vec<RttBucket>,
    pub series: Vec<(DateTime<Utc>, u32)>,
    pub successive: Vec<(u32, u32)>,
}

impl TraceSummary {
    /// Analyze a trace
    ///
    /// Fails if the gap analysis fails. A probability estimate that cannot be
    /// made is kept in `probabilities` rather than failing the summary.
    pub fn new(records: &[LogRecord], space: &SeqSpace) -> Result<Self, AnalysisError> {
        let gaps = analyze_gaps(records, space)?;
        let probabilities = estimate_probabilities(records, gaps.loss_count, space);

        let received = records.len() as u64;
        let lost = gaps.loss_count;
        let sent = received + lost;

        Ok(TraceSummary {
            modulus: space.modulus(),
            sent,
            received,
            lost,
            delivery_rate: received as f64 / sent as f64 * 100.0,
            gaps,
            probabilities,
            rtt: RttStats::from_records(records),
            distribution: rtt_distribution(records),
            series: rtt_series(records),
            successive: successive_rtt_pairs(records),
        })
    }
}
