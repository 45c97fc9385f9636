use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pingstat_core::{analyze_gaps, estimate_probabilities, LogRecord, SeqNumber, SeqSpace, TraceSummary};

/// A day of one-second pings with a burst of loss every 97 probes
fn lossy_trace(len: usize) -> Vec<LogRecord> {
    let mut records = Vec::with_capacity(len);
    let mut seq = 60_000u32;
    for i in 0..len {
        if i % 97 == 0 {
            seq += 3;
        }
        let ts = DateTime::from_timestamp(1_700_000_000 + i as i64, 0).unwrap();
        records.push(LogRecord::new(ts, SeqNumber::new(seq % 65_536), 20 + (i % 13) as u32));
        seq += 1;
    }
    records
}

fn bench_analyze_gaps(c: &mut Criterion) {
    let records = lossy_trace(86_400);
    let space = SeqSpace::default();

    let mut group = c.benchmark_group("gap_analysis");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("analyze_gaps", |b| {
        b.iter(|| {
            let result = analyze_gaps(black_box(&records), &space).unwrap();
            black_box(result);
        });
    });
    group.bench_function("estimate_probabilities", |b| {
        b.iter(|| {
            let result = estimate_probabilities(black_box(&records), 2_000, &space).unwrap();
            black_box(result);
        });
    });
    group.finish();
}

fn bench_trace_summary(c: &mut Criterion) {
    let records = lossy_trace(86_400);
    let space = SeqSpace::default();

    c.bench_function("trace_summary", |b| {
        b.iter(|| {
            let summary = TraceSummary::new(black_box(&records), &space).unwrap();
            black_box(summary);
        });
    });
}

criterion_group!(benches, bench_analyze_gaps, bench_trace_summary);
criterion_main!(benches);
