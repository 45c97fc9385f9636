//! Sequence gap analysis
//!
//! Walks the records once in arrival order and classifies the step between
//! each adjacent pair. A step of one (or zero, for a repeated sequence
//! number) continues the current delivery run; anything larger ends it and
//! accounts `gap - 1` probes as lost.

use crate::error::{require_records, AnalysisError};
use crate::interval::SeqInterval;
use crate::record::LogRecord;
use crate::sequence::{SeqNumber, SeqSpace};
use serde::Serialize;

/// Result of a gap analysis pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapAnalysis {
    /// Total number of probes missing from the trace
    pub loss_count: u64,
    /// Widest gap, as `[last seen before, first seen after]`, sorted ascending
    pub longest_loss: SeqInterval,
    /// Modular width of the widest gap, measured before sorting
    pub longest_loss_len: u32,
    /// Longest unbroken delivery run, sorted ascending
    pub longest_consecutive: SeqInterval,
    /// Modular length of the longest run, measured before sorting
    pub longest_consecutive_len: u32,
    /// Number of gaps wider than one
    pub loss_events: u64,
    /// Number of repeated sequence numbers (gap of zero)
    pub duplicates: u64,
    /// Number of delivery runs ended by a loss or by the end of the trace
    pub completed_runs: usize,
    /// Sequence number of the first record
    pub first_seq: SeqNumber,
    /// Sequence number of the last record
    pub last_seq: SeqNumber,
}

/// Longest interval seen so far, replaced only on strict improvement
#[derive(Debug, Clone, Copy)]
struct Best {
    interval: SeqInterval,
    len: u32,
}

impl Best {
    fn new(interval: SeqInterval, len: u32) -> Self {
        Best { interval, len }
    }

    fn offer(self, candidate: SeqInterval, len: u32) -> Self {
        if len > self.len {
            Best::new(candidate, len)
        } else {
            self
        }
    }
}

/// Analyze sequence gaps over an ordered trace
///
/// Requires at least two records. Sequence numbers are reduced into
/// `space` first, so every reported endpoint lies in `[0, modulus)`.
pub fn analyze_gaps(records: &[LogRecord], space: &SeqSpace) -> Result<GapAnalysis, AnalysisError> {
    require_records(records.len(), 2)?;

    let first = space.reduce(records[0].seq());
    let last = space.reduce(records[records.len() - 1].seq());

    let mut loss_count = 0u64;
    let mut loss_events = 0u64;
    let mut duplicates = 0u64;
    let mut completed_runs = 0usize;

    let mut current = SeqInterval::single(first);
    let mut best_loss = Best::new(SeqInterval::single(first), 0);
    let mut best_run: Option<Best> = None;

    let mut complete_run = |run: SeqInterval, best_run: Option<Best>| -> Option<Best> {
        completed_runs += 1;
        let len = run.len(space);
        Some(match best_run {
            Some(best) => best.offer(run, len),
            None => Best::new(run, len),
        })
    };

    for pair in records.windows(2) {
        let (prev, cur) = (space.reduce(pair[0].seq()), space.reduce(pair[1].seq()));
        let gap = space.gap(prev, cur);

        if gap > 1 {
            loss_count += u64::from(gap - 1);
            loss_events += 1;
            tracing::trace!(prev = prev.as_raw(), cur = cur.as_raw(), lost = gap - 1, "gap");

            if !current.is_single() {
                best_run = complete_run(current, best_run);
            }
            current = SeqInterval::single(cur);
            best_loss = best_loss.offer(SeqInterval::new(prev, cur), gap);
        } else {
            if gap == 0 {
                duplicates += 1;
                tracing::trace!(seq = cur.as_raw(), "repeated sequence number");
            }
            current = current.extended_to(cur);
        }
    }

    if !current.is_single() {
        best_run = complete_run(current, best_run);
    }

    // No run ever completed: the whole span stands in for it
    let longest_run = best_run
        .unwrap_or_else(|| Best::new(SeqInterval::new(first, last), space.gap(first, last)));

    tracing::debug!(
        records = records.len(),
        loss_count,
        loss_events,
        duplicates,
        "gap analysis complete"
    );

    Ok(GapAnalysis {
        loss_count,
        longest_loss: best_loss.interval.sorted(),
        longest_loss_len: best_loss.len,
        longest_consecutive: longest_run.interval.sorted(),
        longest_consecutive_len: longest_run.len,
        loss_events,
        duplicates,
        completed_runs,
        first_seq: first,
        last_seq: last,
    })
}
