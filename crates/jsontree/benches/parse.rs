//! Benchmark – `jsontree::parse`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use jsontree::parse;

/// Produce a *deterministic* JSON document whose textual representation is
/// exactly `target_len` bytes, dominated by one long string payload so that
/// string decoding is the measured work.
fn make_string_payload(target_len: usize) -> String {
    // {"data":"aaaa…"}
    let overhead = "{\"data\":\"\"}".len();
    assert!(target_len >= overhead, "target_len must be >= {overhead}");

    let content_len = target_len - overhead;
    let mut s = String::with_capacity(target_len);
    s.push_str("{\"data\":\"");
    s.extend(std::iter::repeat_n('a', content_len));
    s.push_str("\"}");
    debug_assert_eq!(s.len(), target_len);
    s
}

/// A flat array of `count` short numbers, exercising the number lexer.
fn make_number_payload(count: usize) -> String {
    let mut s = String::from("[");
    for i in 0..count {
        if i > 0 {
            s.push(',');
        }
        s.push_str("1.25e2");
    }
    s.push(']');
    s
}

/// `depth` nested single-member objects, exercising the structural
/// recursion and the temporary-to-final container moves.
fn make_nested_payload(depth: usize) -> String {
    let mut s = String::with_capacity(depth * 6 + 4);
    for _ in 0..depth {
        s.push_str("{\"k\":");
    }
    s.push_str("null");
    for _ in 0..depth {
        s.push('}');
    }
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, payload) in [
        ("string_heavy", make_string_payload(10_000)),
        ("number_heavy", make_number_payload(1_000)),
        ("deeply_nested", make_nested_payload(100)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &payload, |b, p| {
            b.iter(|| {
                let v = parse(black_box(p)).unwrap();
                black_box(v);
            });
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(5))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse }
criterion_main!(benches);
