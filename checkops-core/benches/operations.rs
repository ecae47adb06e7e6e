//! Benchmarks for the validated operations on their success and failure paths

use checkops_core::{
    add_with_overflow_check, get_element_as_number, parse_integer, reverse_text,
    sum_sequence_up_to,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use std::hint::black_box;

fn benchmark_prefix_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_sequence_up_to");

    for len in [16, 256, 4096].iter() {
        let values: Vec<i64> = (0..*len).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| sum_sequence_up_to(Some(black_box(&values[..])), (values.len() - 1) as isize));
        });
    }

    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_integer");

    group.bench_function("valid", |b| {
        b.iter(|| parse_integer::<i32>(black_box("  -2147483648 ")));
    });
    group.bench_function("malformed", |b| {
        b.iter(|| parse_integer::<i32>(black_box("3,, ssdd11")));
    });

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let map: HashMap<String, String> = (0..1000)
        .map(|n| (format!("f{n}"), n.to_string()))
        .collect();

    c.bench_function("get_element_as_number", |b| {
        b.iter(|| get_element_as_number::<i32, _, _>(&map, black_box("f500")));
    });
}

fn benchmark_small_operations(c: &mut Criterion) {
    c.bench_function("add_with_overflow_check", |b| {
        b.iter(|| add_with_overflow_check(black_box(i32::MAX), black_box(1)));
    });
    c.bench_function("reverse_text", |b| {
        b.iter(|| reverse_text(Some(black_box("The quick brown fox jumps over the lazy dog"))));
    });
}

criterion_group!(
    benches,
    benchmark_prefix_sum,
    benchmark_parsing,
    benchmark_lookup,
    benchmark_small_operations
);
criterion_main!(benches);
