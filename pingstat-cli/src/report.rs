//! Report display and formatting

use pingstat::{AnalysisError, ConditionalProbabilities, RttBucket, TraceSummary};
use std::io::{self, Write};

/// Format a percentage with three decimals
pub fn format_percent(value: f64) -> String {
    format!("{:.3} %", value)
}

/// Format RTT in human-readable form
pub fn format_rtt(rtt_ms: u32) -> String {
    if rtt_ms >= 1_000 {
        format!("{:.2}s", rtt_ms as f64 / 1_000.0)
    } else {
        format!("{}ms", rtt_ms)
    }
}

/// Format a probability estimate, or why there is none
pub fn format_probability(
    estimate: &Result<ConditionalProbabilities, AnalysisError>,
    pick: impl Fn(&ConditionalProbabilities) -> f64,
) -> String {
    match estimate {
        Ok(p) => format_percent(pick(p)),
        Err(AnalysisError::DivisionByZero) => "N/A (no loss)".to_string(),
        Err(AnalysisError::InsufficientData { .. }) => "N/A (too few records)".to_string(),
        Err(e) => format!("N/A ({})", e),
    }
}

/// Write the summary report
pub fn write_summary<W: Write>(out: &mut W, summary: &TraceSummary) -> io::Result<()> {
    let gaps = &summary.gaps;

    writeln!(out, "┌─────────────────────────────────────────────────────────────┐")?;
    writeln!(out, "│ DELIVERY                                                    │")?;
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(out, "│ Probes sent:      {}", summary.sent)?;
    writeln!(out, "│ Replies received: {}", summary.received)?;
    writeln!(out, "│ Probes lost:      {}", summary.lost)?;
    writeln!(out, "│ Delivery rate:    {}", format_percent(summary.delivery_rate))?;
    if gaps.duplicates > 0 {
        writeln!(out, "│ Repeated seqs:    {}", gaps.duplicates)?;
    }
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(out, "│ ROUND-TRIP TIME                                             │")?;
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    match &summary.rtt {
        Some(rtt) => {
            writeln!(out, "│ Min RTT:          {}", format_rtt(rtt.min_ms))?;
            writeln!(out, "│ Max RTT:          {}", format_rtt(rtt.max_ms))?;
            writeln!(out, "│ Mean RTT:         {:.2}ms", rtt.mean_ms)?;
        }
        None => writeln!(out, "│ No RTT samples")?,
    }
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(out, "│ RUNS                                                        │")?;
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(
        out,
        "│ Longest loss:     {}, {} probes lost",
        gaps.longest_loss,
        gaps.longest_loss_len.saturating_sub(1)
    )?;
    writeln!(
        out,
        "│ Longest delivery: {}, {} probes received",
        gaps.longest_consecutive,
        gaps.longest_consecutive_len + 1
    )?;
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(out, "│ CONDITIONAL DELIVERY                                        │")?;
    writeln!(out, "├─────────────────────────────────────────────────────────────┤")?;
    writeln!(
        out,
        "│ P(#N+1 answered | #N answered): {}",
        format_probability(&summary.probabilities, |p| p.given_prev_delivered)
    )?;
    writeln!(
        out,
        "│ P(#N+1 answered | #N lost):     {}",
        format_probability(&summary.probabilities, |p| p.given_prev_lost)
    )?;
    writeln!(out, "└─────────────────────────────────────────────────────────────┘")?;
    Ok(())
}

/// Write the RTT frequency table
pub fn write_distribution<W: Write>(out: &mut W, buckets: &[RttBucket]) -> io::Result<()> {
    writeln!(out, "┌──────────┬──────────┬──────────┐")?;
    writeln!(out, "│ RTT      │ Count    │ Share    │")?;
    writeln!(out, "├──────────┼──────────┼──────────┤")?;
    for bucket in buckets {
        writeln!(
            out,
            "│ {:8} │ {:8} │ {:7.3}% │",
            format_rtt(bucket.rtt_ms),
            bucket.count,
            bucket.percent
        )?;
    }
    writeln!(out, "└──────────┴──────────┴──────────┘")?;
    Ok(())
}

/// Serialize the full report as pretty JSON
pub fn to_json(summary: &TraceSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// Display the summary (and optionally the RTT table) on stdout
pub fn display_summary(summary: &TraceSummary, distribution: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, summary)?;
    if distribution {
        writeln!(out)?;
        write_distribution(&mut out, &summary.distribution)?;
    }
    out.flush()
}
