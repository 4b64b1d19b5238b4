//! WordWrapper benchmark: Measure token throughput.
//!
//! Playback never needs more than a few hundred tokens per second, so this
//! mostly guards against accidental quadratic behaviour on long lines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io;
use teleprompter::text::{WordWrapper, DEFAULT_WRAP_WIDTH};

const PROSE: &str = "It was the best of times, it was the worst of times, it was the age \
of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness";

fn count_tokens(lines: &[String]) -> usize {
    WordWrapper::new(lines.iter().cloned().map(Ok::<_, io::Error>), DEFAULT_WRAP_WIDTH).count()
}

fn wrap_short_lines(c: &mut Criterion) {
    let lines: Vec<String> = (0..1_000).map(|_| "a b c d e f".to_string()).collect();

    c.bench_function("wrap_1000_short_lines", |b| {
        b.iter(|| count_tokens(black_box(&lines)));
    });
}

fn wrap_long_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrap_long_line");

    for repeats in [1, 10, 100] {
        let line = vec![vec![PROSE; repeats].join(" ")];
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &line, |b, line| {
            b.iter(|| count_tokens(black_box(line)));
        });
    }

    group.finish();
}

fn wrap_reader(c: &mut Criterion) {
    let text = vec![PROSE; 500].join("\n");

    c.bench_function("wrap_from_reader", |b| {
        b.iter(|| WordWrapper::from_reader(black_box(text.as_bytes()), DEFAULT_WRAP_WIDTH).count());
    });
}

criterion_group!(benches, wrap_short_lines, wrap_long_lines, wrap_reader);
criterion_main!(benches);
