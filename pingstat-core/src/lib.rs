//! Packet Loss and Latency Analysis Core
//!
//! This crate implements the analysis of ping probe traces: sequence-gap
//! analysis over a circular sequence-number space, conditional delivery
//! probabilities, and round-trip time statistics.

pub mod error;
pub mod gap;
pub mod interval;
pub mod probability;
pub mod record;
pub mod rtt;
pub mod sequence;
pub mod summary;

pub use error::AnalysisError;
pub use gap::{analyze_gaps, GapAnalysis};
pub use interval::SeqInterval;
pub use probability::{estimate_probabilities, ConditionalProbabilities};
pub use record::LogRecord;
pub use rtt::{rtt_distribution, rtt_series, successive_rtt_pairs, RttBucket, RttStats};
pub use sequence::{SeqNumber, SeqSpace, DEFAULT_MODULUS};
pub use summary::TraceSummary;
