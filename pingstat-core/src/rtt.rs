//! Round-trip time statistics
//!
//! Summary figures plus the three series a latency report charts: RTT over
//! time, the RTT frequency distribution, and each RTT against the next.

use crate::record::LogRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// RTT summary over all answered probes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RttStats {
    pub min_ms: u32,
    pub max_ms: u32,
    pub mean_ms: f64,
    pub samples: usize,
}

impl RttStats {
    /// Compute summary statistics, `None` when there are no records
    pub fn from_records(records: &[LogRecord]) -> Option<Self> {
        let min_ms = records.iter().map(LogRecord::rtt_ms).min()?;
        let max_ms = records.iter().map(LogRecord::rtt_ms).max()?;
        let total: u64 = records.iter().map(|r| u64::from(r.rtt_ms())).sum();

        Some(RttStats {
            min_ms,
            max_ms,
            mean_ms: total as f64 / records.len() as f64,
            samples: records.len(),
        })
    }
}

/// One bar of the RTT frequency distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RttBucket {
    pub rtt_ms: u32,
    pub count: usize,
    /// Share of all samples, as a percentage
    pub percent: f64,
}

/// Frequency of each distinct RTT value, ascending by RTT
pub fn rtt_distribution(records: &[LogRecord]) -> Vec<RttBucket> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.rtt_ms()).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(rtt_ms, count)| RttBucket {
            rtt_ms,
            count,
            percent: count as f64 / total * 100.0,
        })
        .collect()
}

/// RTT against reply time
pub fn rtt_series(records: &[LogRecord]) -> Vec<(DateTime<Utc>, u32)> {
    records.iter().map(|r| (r.timestamp(), r.rtt_ms())).collect()
}

/// Each RTT paired with the one that follows it
pub fn successive_rtt_pairs(records: &[LogRecord]) -> Vec<(u32, u32)> {
    records
        .windows(2)
        .map(|pair| (pair[0].rtt_ms(), pair[1].rtt_ms()))
        .collect()
}
