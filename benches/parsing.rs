//! Benchmarks for chatlens validation, parsing and analysis.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- analyze`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::output::{to_csv, to_jsonl};
use chatlens::parser::ChatParser;
use chatlens::parsing::is_recognized_export;
use chatlens::stats::analyze;

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 7] = ["Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace"];

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let sender = SENDERS[(i * i + i / 3) % SENDERS.len()];
        let hour = i % 12 + 1;
        let minute = i % 60;
        let marker = if i % 2 == 0 { "AM" } else { "PM" };
        lines.push(format!(
            "[1/15/24, {}:{:02}:00 {}] {}: Message number {}",
            hour, minute, marker, sender, i
        ));
        if i % 10 == 0 {
            lines.push("  continued on the next line".to_string());
        }
    }
    lines.join("\n")
}

fn generate_preamble(count: usize) -> String {
    let mut text = "plain text line without a header\n".repeat(count);
    text.push_str("[1/15/24, 10:00:00] Alice: finally a message\n");
    text
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    for size in [100_usize, 1_000, 10_000] {
        let text = generate_preamble(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| black_box(is_recognized_export(black_box(text).lines())));
        });
    }
    group.finish();
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let text = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let log = parser.parse_str(black_box(text));
                black_box(log)
            });
        });
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    let parser = ChatParser::new();

    for size in [1_000_usize, 10_000] {
        let text = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let count = parser
                    .records(black_box(text.as_bytes()))
                    .filter(Result::is_ok)
                    .count();
                black_box(count)
            });
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let log = parser.parse_str(&generate_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &log, |b, log| {
            b.iter(|| black_box(analyze(black_box(log))));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = ChatParser::new();

    for size in [1_000_usize, 10_000] {
        let text = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                // validate -> parse -> analyze -> output
                assert!(is_recognized_export(text.lines()));
                let log = parser.parse_str(black_box(text));
                let analysis = analyze(&log);
                let csv = to_csv(&log).unwrap();
                let jsonl = to_jsonl(&log).unwrap();
                black_box((analysis, csv, jsonl))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_validation,
    bench_parsing,
    bench_streaming,
    bench_analyze,
    bench_full_pipeline,
);

criterion_main!(benches);
