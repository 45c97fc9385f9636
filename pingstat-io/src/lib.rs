//! pingstat Input
//!
//! This crate reads probe traces from ping logs: line matching, timestamp
//! conversion and file/stdin readers.

pub mod reader;
pub mod time;

pub use reader::{parse_line, read_file, read_records, LineError, ParsedLog, ReadError};
pub use time::parse_epoch_seconds;
