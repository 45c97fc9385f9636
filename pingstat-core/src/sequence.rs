//! Sequence Number Handling
//!
//! ICMP echo sequence numbers are 16-bit values that wrap around after
//! 65535. This module provides a sequence number type and an explicit
//! sequence space that carries the modulus, so every component that does
//! wraparound arithmetic receives it as a parameter instead of reading a
//! global.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the ICMP sequence-number space (16-bit counter)
pub const DEFAULT_MODULUS: u32 = 65_536;

/// Probe sequence number as observed in the log
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeqNumber(u32);

impl SeqNumber {
    /// Create a new sequence number
    #[inline]
    pub const fn new(value: u32) -> Self {
        SeqNumber(value)
    }

    /// Get the raw sequence number value
    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeqNumber({})", self.0)
    }
}

impl fmt::Display for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SeqNumber {
    fn from(value: u32) -> Self {
        SeqNumber(value)
    }
}

impl From<u16> for SeqNumber {
    fn from(value: u16) -> Self {
        SeqNumber(u32::from(value))
    }
}

impl From<SeqNumber> for u32 {
    fn from(seq: SeqNumber) -> u32 {
        seq.0
    }
}

/// Circular sequence-number space
///
/// All differences between sequence numbers are taken modulo `modulus`, so
/// a counter that rolls over from `modulus - 1` to `0` looks like an
/// ordinary step of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeqSpace {
    modulus: u32,
}

impl SeqSpace {
    /// Create a sequence space with the given modulus
    ///
    /// A space needs at least two values for "next" to differ from "same".
    pub fn new(modulus: u32) -> Result<Self, AnalysisError> {
        if modulus < 2 {
            return Err(AnalysisError::InvalidModulus(modulus));
        }
        Ok(SeqSpace { modulus })
    }

    /// The modulus of this space
    #[inline]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Check whether a raw value is a valid member of this space
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value < self.modulus
    }

    /// Bring a raw sequence number into `[0, modulus)`
    #[inline]
    pub fn reduce(&self, seq: SeqNumber) -> SeqNumber {
        SeqNumber(seq.0 % self.modulus)
    }

    /// Forward distance from `from` to `to`, in `[0, modulus)`
    ///
    /// This is the "gap" between two adjacent records: 1 means no loss,
    /// `n > 1` means `n - 1` probes went missing, 0 means a repeat.
    pub fn gap(&self, from: SeqNumber, to: SeqNumber) -> u32 {
        let m = u64::from(self.modulus);
        let from = u64::from(from.as_raw()) % m;
        let to = u64::from(to.as_raw()) % m;
        ((to + m - from) % m) as u32
    }
}

impl Default for SeqSpace {
    fn default() -> Self {
        SeqSpace {
            modulus: DEFAULT_MODULUS,
        }
    }
}
