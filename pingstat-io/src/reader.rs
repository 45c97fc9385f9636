//! Ping log reader
//!
//! Extracts probe records from `ping -D` output. A reply line looks like
//!
//! ```text
//! [1700000000.123456] 64 bytes from 10.0.0.1: icmp_seq=42 ttl=57 time=23 ms
//! ```
//!
//! Lines without a bracketed timestamp, an `icmp_seq=` field and a
//! `time=<n> ms` field (headers, timeouts, the closing statistics) are
//! skipped.

use crate::time::parse_epoch_seconds;
use pingstat_core::{LogRecord, SeqNumber, SeqSpace};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const SEQ_FIELD: &str = "icmp_seq=";
const TIME_FIELD: &str = " time=";
const TIME_UNIT: &str = " ms";

/// Errors reading a log
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A reply line that had the right shape but unusable values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Sequence number {seq} outside the sequence space (modulus {modulus})")]
    SeqOutOfRange { seq: String, modulus: u32 },

    #[error("Invalid round-trip time: {0}")]
    InvalidRtt(String),
}

/// Records extracted from a log, with bookkeeping on what was dropped
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    /// Records in the order they appeared
    pub records: Vec<LogRecord>,
    /// Lines that are not reply lines
    pub skipped: usize,
    /// Reply lines rejected because of a bad value
    pub rejected: usize,
}

/// Raw fields of a reply line, before validation
#[derive(Debug, PartialEq, Eq)]
struct ReplyFields<'a> {
    timestamp: &'a str,
    seq: &'a str,
    rtt: &'a str,
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Split a reply line into its raw fields
fn match_reply(line: &str) -> Option<ReplyFields<'_>> {
    let open = line.find('[')?;
    let after_open = &line[open + 1..];
    let close = after_open.find("] ")?;
    let timestamp = &after_open[..close];
    let rest = &after_open[close + 2..];

    let seq_at = rest.find(SEQ_FIELD)?;
    let after_seq = &rest[seq_at + SEQ_FIELD.len()..];
    let seq = leading_digits(after_seq);
    if seq.is_empty() || !after_seq[seq.len()..].starts_with(' ') {
        return None;
    }
    let rest = &after_seq[seq.len()..];

    // Last time field on the line
    let time_at = rest.rfind(TIME_FIELD)?;
    let after_time = &rest[time_at + TIME_FIELD.len()..];
    let whole = leading_digits(after_time);
    if whole.is_empty() {
        return None;
    }
    let mut rtt_len = whole.len();
    if let Some(fraction) = after_time[rtt_len..].strip_prefix('.') {
        rtt_len += 1 + leading_digits(fraction).len();
    }
    if !after_time[rtt_len..].starts_with(TIME_UNIT) {
        return None;
    }

    Some(ReplyFields {
        timestamp,
        seq,
        rtt: &after_time[..rtt_len],
    })
}

/// Parse one log line
///
/// Returns `Ok(None)` for lines that are not reply lines. Fractional RTTs
/// are truncated to whole milliseconds.
pub fn parse_line(line: &str, space: &SeqSpace) -> Result<Option<LogRecord>, LineError> {
    let Some(fields) = match_reply(line) else {
        return Ok(None);
    };

    let timestamp = parse_epoch_seconds(fields.timestamp)
        .ok_or_else(|| LineError::InvalidTimestamp(fields.timestamp.to_string()))?;

    let seq = fields
        .seq
        .parse::<u32>()
        .ok()
        .filter(|&seq| space.contains(seq))
        .ok_or_else(|| LineError::SeqOutOfRange {
            seq: fields.seq.to_string(),
            modulus: space.modulus(),
        })?;

    let whole_ms = fields.rtt.split('.').next().unwrap_or_default();
    let rtt_ms = whole_ms
        .parse::<u32>()
        .map_err(|_| LineError::InvalidRtt(fields.rtt.to_string()))?;

    Ok(Some(LogRecord::new(timestamp, SeqNumber::new(seq), rtt_ms)))
}

/// Read every record from a buffered reader
pub fn read_records<R: BufRead>(reader: R, space: &SeqSpace) -> Result<ParsedLog, ReadError> {
    let mut parsed = ParsedLog::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line, space) {
            Ok(Some(record)) => parsed.records.push(record),
            Ok(None) => parsed.skipped += 1,
            Err(e) => {
                tracing::warn!("Rejected line {}: {}", index + 1, e);
                parsed.rejected += 1;
            }
        }
    }

    tracing::debug!(
        records = parsed.records.len(),
        skipped = parsed.skipped,
        rejected = parsed.rejected,
        "log read"
    );

    Ok(parsed)
}

/// Read every record from a file
pub fn read_file<P: AsRef<Path>>(path: P, space: &SeqSpace) -> Result<ParsedLog, ReadError> {
    let file = File::open(path)?;
    read_records(BufReader::new(file), space)
}
