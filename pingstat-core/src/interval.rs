//! Sequence-number intervals

use crate::sequence::{SeqNumber, SeqSpace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range of sequence numbers
///
/// Intervals are values: every update builds a new one rather than moving
/// an endpoint in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqInterval {
    /// First sequence number in range
    pub start: SeqNumber,
    /// Last sequence number in range (inclusive)
    pub end: SeqNumber,
}

impl SeqInterval {
    /// Create a new interval
    pub fn new(start: SeqNumber, end: SeqNumber) -> Self {
        SeqInterval { start, end }
    }

    /// Create a single-point interval
    pub fn single(seq: SeqNumber) -> Self {
        SeqInterval {
            start: seq,
            end: seq,
        }
    }

    /// Check if this is a single point
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Modular length, `(end - start) mod modulus`
    pub fn len(&self, space: &SeqSpace) -> u32 {
        space.gap(self.start, self.end)
    }

    /// Same start, new end
    pub fn extended_to(self, end: SeqNumber) -> Self {
        SeqInterval {
            start: self.start,
            end,
        }
    }

    /// Endpoints in ascending numeric order (ignores wraparound)
    pub fn sorted(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            SeqInterval {
                start: self.end,
                end: self.start,
            }
        }
    }
}

impl fmt::Display for SeqInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
