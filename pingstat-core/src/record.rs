//! Probe-response records
//!
//! One record per answered probe, in the order the replies were logged.

use crate::sequence::SeqNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single answered probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    timestamp: DateTime<Utc>,
    seq: SeqNumber,
    rtt_ms: u32,
}

impl LogRecord {
    /// Create a new record
    pub fn new(timestamp: DateTime<Utc>, seq: SeqNumber, rtt_ms: u32) -> Self {
        LogRecord {
            timestamp,
            seq,
            rtt_ms,
        }
    }

    /// Time the reply was logged
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Probe sequence number
    #[inline]
    pub fn seq(&self) -> SeqNumber {
        self.seq
    }

    /// Round-trip time in milliseconds
    #[inline]
    pub fn rtt_ms(&self) -> u32 {
        self.rtt_ms
    }
}
