//! Filter throughput benchmark over a generated directory.
//!
//! The filter is a linear scan; these benchmarks pin the cost of a single
//! search round on a directory far larger than the production sample.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plzfind::model::{Salesman, SalesmanId};
use plzfind::search::filter_salesmen;

/// Generate a directory with a mix of exact and wildcard coverage areas.
fn generate_directory(count: usize) -> Vec<Salesman> {
    (0..count)
        .map(|i| {
            let id = SalesmanId::new(format!("salesman-{i:05}")).expect("valid id");
            let base = 10_000 + (i * 7) % 90_000;
            let areas = vec![format!("{base:05}"), format!("{:03}*", base / 100)];
            Salesman::new(id, format!("Salesman {i}"), areas)
        })
        .collect()
}

fn filter_benchmark(c: &mut Criterion) {
    let directory = generate_directory(10_000);

    c.bench_function("filter_exact_query_10k", |b| {
        b.iter(|| filter_salesmen(black_box(&directory), black_box("76133"), 5))
    });

    c.bench_function("filter_wildcard_query_10k", |b| {
        b.iter(|| filter_salesmen(black_box(&directory), black_box("761*"), 5))
    });

    c.bench_function("filter_empty_query_10k", |b| {
        b.iter(|| filter_salesmen(black_box(&directory), black_box(""), 5))
    });
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
