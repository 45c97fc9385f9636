//! pingstat - Packet Loss and Latency Analysis
//!
//! High-level Rust API for analyzing ping probe traces.

pub use pingstat_core as analysis;
pub use pingstat_io as input;

// Re-export commonly used types
pub use analysis::{
    AnalysisError, ConditionalProbabilities, GapAnalysis, LogRecord, RttBucket, RttStats,
    SeqInterval, SeqNumber, SeqSpace, TraceSummary,
};
pub use input::{read_file, read_records, ParsedLog, ReadError};
