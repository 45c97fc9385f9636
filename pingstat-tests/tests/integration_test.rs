//! End-to-end integration tests
//!
//! Reads ping logs through the input layer and checks the full summary.

use pingstat::{read_file, read_records, AnalysisError, SeqInterval, SeqNumber, SeqSpace, TraceSummary};

fn reply(ts: u64, seq: u32, rtt: &str) -> String {
    format!("[{ts}.104233] 64 bytes from 203.0.113.7: icmp_seq={seq} ttl=54 time={rtt} ms\n")
}

fn interval(start: u32, end: u32) -> SeqInterval {
    SeqInterval::new(SeqNumber::new(start), SeqNumber::new(end))
}

/// A log that wraps the 16-bit counter, with noise and one duplicate
fn wrapping_log() -> String {
    let mut log = String::from("PING 203.0.113.7 (203.0.113.7) 56(84) bytes of data.\n");
    let mut ts = 1_700_000_000u64;
    for (seq, rtt) in [
        (65_530, "31"),
        (65_531, "29.4"),
        (65_532, "30"),
        (65_535, "45"),
        (0, "33"),
        (1, "33"),
        (1, "33"),
        (2, "28"),
        (9, "102"),
        (10, "30"),
    ] {
        log.push_str(&reply(ts, seq, rtt));
        ts += 1;
        if seq == 65_532 {
            log.push_str(&format!("[{ts}.000001] no answer yet for icmp_seq=65533\n"));
        }
    }
    log.push_str("\n--- 203.0.113.7 ping statistics ---\n");
    log.push_str("10 packets transmitted, 10 received, 0% packet loss, time 9012ms\n");
    log
}

#[test]
fn test_wrapping_log_summary() {
    let space = SeqSpace::default();
    let parsed = read_records(wrapping_log().as_bytes(), &space).unwrap();
    assert_eq!(parsed.records.len(), 10);
    assert_eq!(parsed.rejected, 0);
    assert_eq!(parsed.skipped, 5);

    let summary = TraceSummary::new(&parsed.records, &space).unwrap();

    // 65533, 65534 and 3..=8 are missing
    assert_eq!(summary.lost, 8);
    assert_eq!(summary.received, 10);
    assert_eq!(summary.sent, 18);
    assert_eq!(summary.gaps.loss_events, 2);
    assert_eq!(summary.gaps.duplicates, 1);

    // 2 -> 9 is wider than 65532 -> 65535
    assert_eq!(summary.gaps.longest_loss, interval(2, 9));
    assert_eq!(summary.gaps.longest_loss_len, 7);

    // 65535, 0, 1, 1, 2 beats 65530..=65532
    assert_eq!(summary.gaps.longest_consecutive, interval(2, 65_535));
    assert_eq!(summary.gaps.longest_consecutive_len, 3);

    let p = summary.probabilities.unwrap();
    assert_eq!(p.interior_count, 8);
    assert_eq!(p.delivered_after_loss, 2);
    assert_eq!(p.delivered_after_delivery, 6);
    assert!((p.given_prev_lost - 25.0).abs() < 1e-9);
    assert!((p.given_prev_delivered - 60.0).abs() < 1e-9);

    let rtt = summary.rtt.unwrap();
    assert_eq!(rtt.min_ms, 28);
    assert_eq!(rtt.max_ms, 102);
    assert_eq!(summary.distribution.iter().map(|b| b.count).sum::<usize>(), 10);
    assert_eq!(summary.successive.first(), Some(&(31, 29)));
}

#[test]
fn test_loss_free_log() {
    let space = SeqSpace::default();
    let log: String = (10..14)
        .map(|seq| reply(1_700_000_000 + u64::from(seq), seq, "20"))
        .collect();
    let parsed = read_records(log.as_bytes(), &space).unwrap();
    let summary = TraceSummary::new(&parsed.records, &space).unwrap();

    assert_eq!(summary.lost, 0);
    assert_eq!(summary.gaps.longest_consecutive, interval(10, 13));
    assert_eq!(summary.probabilities, Err(AnalysisError::DivisionByZero));
}

#[test]
fn test_log_without_replies() {
    let space = SeqSpace::default();
    let parsed = read_records("PING host\nRequest timeout\n".as_bytes(), &space).unwrap();
    assert!(parsed.records.is_empty());
    assert_eq!(
        TraceSummary::new(&parsed.records, &space).unwrap_err(),
        AnalysisError::EmptyInput
    );
}

#[test]
fn test_read_file() {
    let path = std::env::temp_dir().join(format!("pingstat-it-{}.log", std::process::id()));
    std::fs::write(&path, wrapping_log()).unwrap();
    let parsed = read_file(&path, &SeqSpace::default()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(parsed.records.len(), 10);
}

#[test]
fn test_out_of_range_seq_rejected_under_small_space() {
    let space = SeqSpace::new(16).unwrap();
    let log = format!("{}{}{}", reply(1, 14, "5"), reply(2, 15, "5"), reply(3, 16, "5"));
    let parsed = read_records(log.as_bytes(), &space).unwrap();
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.rejected, 1);
}
